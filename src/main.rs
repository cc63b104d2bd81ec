use std::env;
use std::process::ExitCode;

mod cli;

use cli::Context;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match Context::new(&args).and_then(|mut ctx| ctx.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::fatal(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
