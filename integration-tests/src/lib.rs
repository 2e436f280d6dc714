//! Stand-in for the macOS `sips` tool.
//!
//! Every invocation appends its arguments, tab-separated, as one line to a
//! `calls` file next to the executable. For `-z <h> <w> <input> --out
//! <output>` it copies the input to the output instead of scaling it. If an
//! `exit-status` file exists the process exits with that status, and a
//! `fail-at` file makes the call with that (zero-based) index exit with 1
//! without writing anything.
use std::{
    error::Error,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

fn record_call(workdir: &Path, args: &[String]) -> std::io::Result<usize> {
    let calls = workdir.join("calls");
    let previous = std::fs::read_to_string(&calls)
        .map(|s| s.lines().count())
        .unwrap_or(0);
    let mut file = OpenOptions::new().create(true).append(true).open(calls)?;
    file.write_all(args.join("\t").as_bytes())?;
    file.write_all(b"\n")?;
    Ok(previous)
}

fn read_number(path: PathBuf) -> Result<i32, Box<dyn Error>> {
    Ok(std::fs::read_to_string(path)?.trim().parse()?)
}

fn copy_input(args: &[String]) -> std::io::Result<()> {
    match args {
        [flag, _, _, input, out_flag, output] if flag == "-z" && out_flag == "--out" => {
            std::fs::copy(input, output).map(|_| ())
        }
        _ => Ok(()),
    }
}

pub fn fake_sips_main() {
    let workdir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_owned();
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let call = record_call(&workdir, &args).unwrap_or(0);

    if let Ok(fail_at) = read_number(workdir.join("fail-at")) {
        if fail_at as usize == call {
            eprintln!("sips: simulated failure");
            std::process::exit(1);
        }
    }
    if copy_input(&args).is_err() {
        eprintln!("sips: could not write output");
        std::process::exit(1);
    }

    let exit_status = read_number(workdir.join("exit-status")).unwrap_or(0);
    std::process::exit(exit_status);
}
