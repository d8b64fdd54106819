//! git-hook-mux entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;

fn main() {
    // Configure miette for error reporting
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = hook_mux::Cli::parse();

    let code = match hook_mux::invocation_path().and_then(|program| hook_mux::run(cli, &program)) {
        Ok(code) => code,
        Err(e) => {
            let miette_error = miette::Report::msg(format!("{e:#}"));
            eprintln!("{miette_error:?}");
            1
        }
    };

    std::process::exit(code);
}
