use std::env;
use std::path::Path;

use clap::Parser;
use dialoguer::console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use vexnorm_core::error::VexError;
use vexnorm_core::report::console::{
    emit_progress_line, format_all_not_affected_warning, format_completion, format_progress_line,
};
use vexnorm_core::vex::workflow::{
    discover_vex_files, output_path_for, process_file, FileOutcome, OUTPUT_FILE_NAME,
    VEX_FILE_NAME,
};

/// Rewrites VEX timestamps to RFC3339 UTC and re-serializes the document.
#[derive(Parser, Debug)]
#[command(name = "vex_normalizer", version)]
struct Cli {
    /// Process every vex.json under the current directory, recursively.
    #[arg(long)]
    folder: bool,
}

/// Console context for the drivers: prompts, progress, per-file results.
/// All user interaction goes through here instead of ad-hoc globals.
struct Ui {
    theme: ColorfulTheme,
}

impl Ui {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn prompt_path(&self, prompt: &str, default: &str) -> dialoguer::Result<String> {
        Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
    }

    fn progress(&self, done: usize, total: usize, name: &str) {
        emit_progress_line(&format_progress_line(done, total, name));
    }

    fn report_outcome(&self, input: &Path, outcome: FileOutcome) {
        if outcome.all_not_affected {
            println!("{}", style(format_all_not_affected_warning(input)).yellow());
        } else {
            println!("{}", format_completion(input));
        }
    }

    fn report_error(&self, err: &VexError) {
        eprintln!("{}", err);
    }
}

fn main() {
    let cli = Cli::parse();
    let ui = Ui::new();
    let code = if cli.folder {
        run_folder(&ui)
    } else {
        run_single(&ui)
    };
    std::process::exit(code);
}

/// Interactive single-file mode. Any failure is fatal.
fn run_single(ui: &Ui) -> i32 {
    let input = match ui.prompt_path("File to parse", VEX_FILE_NAME) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error reading input path: {}", e);
            return 1;
        }
    };

    let output = match ui.prompt_path("Output file", OUTPUT_FILE_NAME) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error reading output path: {}", e);
            return 1;
        }
    };

    match process_file(Path::new(&input), Path::new(&output)) {
        Ok(outcome) => {
            ui.report_outcome(Path::new(&input), outcome);
            0
        }
        Err(e) => {
            ui.report_error(&e);
            1
        }
    }
}

/// Recursive mode. Per-file failures are reported and the batch continues;
/// the run itself only fails if the working directory cannot be resolved.
fn run_folder(ui: &Ui) -> i32 {
    let cwd = match env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error resolving current directory: {}", e);
            return 1;
        }
    };

    let (files, walk_errors) = discover_vex_files(&cwd);
    for err in &walk_errors {
        eprintln!("error during directory scan: {}", err);
    }

    if files.is_empty() {
        println!("No {} files found under {}.", VEX_FILE_NAME, cwd.display());
        return 0;
    }

    let total = files.len();
    for (idx, file) in files.iter().enumerate() {
        if total > 1 {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.progress(idx + 1, total, &name);
        }

        let output = output_path_for(file);
        match process_file(file, &output) {
            Ok(outcome) => ui.report_outcome(file, outcome),
            Err(e) => ui.report_error(&e),
        }
    }

    println!("All files processed.");
    0
}
