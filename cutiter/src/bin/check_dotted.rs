// Checks each argument for dotted notation: `<letter>+` or `a.<number>` elements.
//
// $ DEV_LOG_FORMAT=plain cargo run --bin check_dotted -- a.0.bbb b.0
// 2020-04-05T00:37:48.675-07:00 INFO valid, input: a.0.bbb, thread: main
// 2020-04-05T00:37:48.676-07:00 ERRO invalid, error: 0: not a letter, input: b.0, thread: main
use logging::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let global_logger_guard = logging::configure("info")?;
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: check_dotted INPUT...");
        std::process::exit(2);
    }
    let invalid = logging::thread_scope("main", || {
        let mut invalid = 0;
        for input in &inputs {
            match cutiter::dotted::check_valid_format(input) {
                Ok(()) => info!("valid"; "input" => input.as_str()),
                Err(e) => {
                    error!("invalid"; "input" => input.as_str(), "error" => e.to_string());
                    invalid += 1;
                }
            }
        }
        invalid
    });
    // Flushes the async drain before exiting.
    drop(global_logger_guard);
    if invalid > 0 {
        std::process::exit(1);
    }
    Ok(())
}
