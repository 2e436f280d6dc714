fn main() -> eyre::Result<()> {
    iconcraft::run()
}
