fn main() {
    integration_tests::fake_sips_main();
}
