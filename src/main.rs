use chrono::Local;
use pretty_sleepy::{deadline_after, parse_duration, refresh_rate_from_env, run_countdown};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        println!();
        println!("  Usage: pretty-sleepy [time]");
        println!();
        println!("  Sleep for specified amount of time and exit");
        println!();
        println!("  If [time] consists of digits only, it is treated as seconds");
        println!();
        println!("  [time] can also be specified as hms string consisting of following parts:");
        println!();
        println!("    XXh   XX hours");
        println!("    XXm   XX minutes");
        println!("    XXs   XX seconds");
        println!("    XXms  XX milliseconds");
        println!();
        println!("  Every part can be omitted but the parts may only occur once and have to");
        println!("  appear in the order above.");
        println!();
        println!("  Examples:");
        println!();
        println!("    pretty-sleepy 5m               Sleep for 5 minutes");
        println!("    pretty-sleepy 7h3m             Sleep for 7 hours and 3 minutes");
        println!("    pretty-sleepy 1m350ms          Sleep for 1 minute and 350 milliseconds");
        println!("    pretty-sleepy 98h40m37s973ms   Sleep for 98 hours, 40 minutes,");
        println!("                                   37 seconds and 973 milliseconds");
        println!("    pretty-sleepy 86400s           Sleep for 24 hours");
        std::process::exit(1);
    }

    // Only the first argument is read as a time; anything after it is ignored.
    let duration_ms = parse_duration(&args[0]);
    let deadline = deadline_after(Local::now(), duration_ms);

    run_countdown(deadline, refresh_rate_from_env()).await;
}
