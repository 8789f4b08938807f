// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vignette CLI entrypoint.
//!
//! By default this runs the built-in demo dialogue in the interactive TUI. Pass a script path
//! (positional or via `--script`) to play a JSON dialogue script instead.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<script.json>]\n  {program} [--script <script.json>]\n  {program} --demo\n\nPlays a dialogue script in the terminal. Space/enter advances (or skips the\ncurrent reveal); q or Esc closes the session.\n\nIf no script is given, --demo is implied."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    script_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--script" => {
                if options.script_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.script_path = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.script_path.is_some() {
                    return Err(());
                }
                options.script_path = Some(arg);
            }
        }
    }

    if options.demo && options.script_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "vignette".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let script = match options.script_path {
            Some(path) => vignette::script::load_script(path)?,
            None => vignette::tui::demo_script(),
        };

        vignette::tui::run_with_script(script)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("vignette: {err}");
        std::process::exit(1);
    }
}
