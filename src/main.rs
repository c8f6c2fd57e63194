use clap::Parser;
use defaults_and_capture::capture::Outer;
use defaults_and_capture::select::{resolve, SelectOptions};

/// Simple runner: prints the canonical output of both demos, or just one.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON options for the selection demo, e.g. '{"step":3}'.
    /// Replaces the canonical sequence of four calls with this one.
    #[arg(long)]
    options: Option<String>,
    /// Run only the defaulted-selection demo (optional flag)
    #[arg(long)]
    select: bool,
    /// Run only the context-capture demo (optional flag)
    #[arg(long)]
    capture: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();
    let run_select = args.select || !args.capture;
    let run_capture = args.capture || !args.select;

    if run_select {
        if let Some(json) = args.options.as_deref() {
            match SelectOptions::from_json(json) {
                Ok(opts) => print_selection(Some(opts)),
                Err(e) => {
                    eprintln!("Invalid options: {e}");
                    std::process::exit(1);
                }
            }
        } else {
            // The canonical sequence: full mapping, partial mapping,
            // empty mapping, no argument.
            print_selection(Some(SelectOptions {
                start: 10,
                end: 30,
                step: 2,
            }));
            print_selection(Some(SelectOptions {
                step: 3,
                ..Default::default()
            }));
            print_selection(Some(SelectOptions::default()));
            print_selection(None);
        }
    }

    if run_capture {
        let obj = Outer { foo: 123 };
        let (direct, via_inner) = obj.bar();
        println!("{direct}");
        println!("{via_inner}");
    }
}

fn print_selection(opts: Option<SelectOptions>) {
    let SelectOptions { start, end, step } = resolve(opts);
    println!("{start} {end} {step}");
}
