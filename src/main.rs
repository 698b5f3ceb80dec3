use classgen::{context::Context, run_main};

fn main() {
    std::process::exit(run_main(Context::production(), std::env::args_os()));
}
