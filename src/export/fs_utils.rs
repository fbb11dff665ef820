use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Create the destination's parent directory and, unless `force`, ask
/// before overwriting an existing file. Returns false when the user
/// declines (the caller aborts quietly).
pub(crate) fn prepare_destination(path: &Path, force: bool) -> AppResult<bool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if path.exists() && !force {
        println!(
            "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
            path.display()
        );

        use std::io::{Write, stdin, stdout};

        let mut answer = String::new();
        print!("> ");
        stdout().flush().ok();

        stdin()
            .read_line(&mut answer)
            .expect("Failed to read user input");

        let answer = answer.trim().to_lowercase();

        if !(answer == "y" || answer == "yes") {
            println!("❌ Export cancelled by user.");
            return Ok(false);
        }
        println!();
    }

    Ok(true)
}
