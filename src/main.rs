// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for gui-utils
//!
//! Runs the save/open dialogs from the command line and launches the
//! demo window.

use clap::{Parser, Subcommand};
use colored::*;
use gui_utils::core::ExtensionFilter;
use gui_utils::ui::{request_open_target, request_save_target, DemoApp};
use gui_utils::FileSelection;
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(name = "gui-utils")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log dialog lifecycle details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a save dialog and print the target path
    Save {
        /// Directory the dialog starts in
        #[arg(short, long, default_value = "~")]
        dir: String,

        /// Suggested file name, without extension
        #[arg(short, long, default_value = "untitled")]
        name: String,

        /// Default extension including the dot, e.g. ".txt"
        #[arg(short, long, default_value = ".txt")]
        ext: String,

        /// Extension filter as "Description:ext[,ext...]" (repeatable, first is active)
        #[arg(short, long = "filter", default_value = "Text files:txt")]
        filters: Vec<ExtensionFilter>,
    },

    /// Show an open dialog and print the chosen path
    Open {
        /// Directory the dialog starts in
        #[arg(short, long, default_value = "~")]
        dir: String,

        /// Extension filter as "Description:ext[,ext...]" (repeatable, first is active)
        #[arg(short, long = "filter", default_value = "Text files:txt")]
        filters: Vec<ExtensionFilter>,
    },

    /// Launch the demo editor window
    Demo {
        /// Directory the dialogs start in
        #[arg(short, long, default_value = "~")]
        dir: String,

        /// Extension filter as "Description:ext[,ext...]" (repeatable, first is active)
        #[arg(short, long = "filter", default_value = "Text files:txt")]
        filters: Vec<ExtensionFilter>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).env().init()?;

    match cli.command {
        Commands::Save {
            dir,
            name,
            ext,
            filters,
        } => {
            gtk4::init()?;
            let selection = request_save_target(&dir, &name, &ext, None::<&gtk4::Window>, &filters);
            report(selection);
        }
        Commands::Open { dir, filters } => {
            gtk4::init()?;
            let selection = request_open_target(&dir, None::<&gtk4::Window>, &filters);
            report(selection);
        }
        Commands::Demo { dir, filters } => {
            let code = DemoApp::new(&dir, filters).run();
            if code != gtk4::glib::ExitCode::SUCCESS {
                anyhow::bail!("Demo exited with {:?}", code);
            }
        }
    }

    Ok(())
}

/// Print a dialog outcome
fn report(selection: Option<FileSelection>) {
    match selection {
        Some(selection) => {
            println!("{} {}", "✓".green(), selection.path.display());
            println!("  {} {}", "in".dimmed(), selection.directory.display());
        }
        None => println!("{} {}", "✗".yellow(), "No selection (cancelled)".yellow()),
    }
}
