use std::fs;
use std::path::Path;

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE, WORKSPACE_DIR};
use crate::error::{AlianzaError, Result};

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the workspace directory or its files cannot be
/// created, or if one already exists and `--force` was not given.
pub fn execute(args: &InitArgs) -> Result<()> {
    let workspace = Path::new(WORKSPACE_DIR);
    let config_path = workspace.join(CONFIG_FILE);

    if workspace.exists() {
        if config_path.exists() && !args.force {
            return Err(AlianzaError::AlreadyInitialized { path: config_path });
        }
    } else {
        fs::create_dir(workspace)?;
    }

    fs::create_dir_all(workspace.join("data"))?;

    let prefix = args.prefix.as_deref().unwrap_or("APS");
    if !config_path.exists() || args.force {
        let config = format!(
            "# Alianza Workspace Configuration\nprefix: {prefix}\n# data_dir: .alianza/data\n"
        );
        fs::write(&config_path, config)?;
    }

    let gitignore_path = workspace.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore = "# Stored request documents\ndata/\n\n# Temporary\n*.tmp\n";
        fs::write(gitignore_path, gitignore)?;
    }

    println!("Initialized alianza workspace in {WORKSPACE_DIR}/");
    Ok(())
}
