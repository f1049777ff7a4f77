use ayurdiet_cli::run;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(if err.is_input_error() { 2 } else { 1 });
    }
}
