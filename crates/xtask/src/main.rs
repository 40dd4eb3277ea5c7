use anyhow::Context;

mod init;
mod templates;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("init") => run_init(args.collect()),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  init [--dir <path>] [--alias <crate>] [--force]"
        ),
    }
}

fn run_init(args: Vec<String>) -> anyhow::Result<()> {
    let mut options = init::InitOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--force" | "-f" => options.overwrite = true,
            "--dir" => {
                options.target_dir = args.next().context("--dir requires a path")?.into();
            }
            "--alias" | "-a" => {
                options.alias = args.next().context("--alias requires a crate name")?;
            }
            other => anyhow::bail!("Unknown init flag: {other}"),
        }
    }

    println!("Initializing Storybench...");
    let report = init::init(&options);

    if !report.created.is_empty() {
        println!("\nCreated files:");
        for file in &report.created {
            println!("  + {}", file.display());
        }
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped (already exist):");
        for file in &report.skipped {
            println!("  - {}", file.display());
        }
    }

    if !report.success() {
        eprintln!("\nErrors:");
        for error in &report.errors {
            eprintln!("  ! {error}");
        }
        anyhow::bail!("initialization failed");
    }

    println!("\nStorybench initialized!");
    println!("\nNext steps:");
    println!("  1. Make sure storybench, dioxus and tracing-subscriber are dependencies");
    println!("  2. Run your app and open /ui");
    println!(
        "  3. Add more story modules under {}/stories/",
        options.target_dir.display()
    );
    Ok(())
}
