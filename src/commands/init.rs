//! Init command: scaffold a template service directory

use crate::cli::InitArgs;
use crate::error::Result;
use crate::scaffold::{self, ScaffoldOptions};
use crate::ui;

/// Run init command
pub fn run(args: InitArgs) -> Result<()> {
    let options = ScaffoldOptions {
        entry_point: args.entry_point,
    };
    let written = scaffold::scaffold(&args.dir, &options)?;

    for path in &written {
        ui::note(&format!("created {}", path.display()));
    }

    let name = args
        .dir
        .file_name()
        .map_or_else(|| "myfunc".into(), |n| n.to_string_lossy());
    ui::success(&format!("Scaffolded {}", args.dir.display()));
    println!();
    println!("Next steps:");
    println!("  python {}/local_main.py", args.dir.display());
    println!("  fnship {} {}", args.dir.display(), name);

    Ok(())
}
