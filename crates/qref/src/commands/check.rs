//! Check command - validate the built-in catalog.

use clap::Args;
use qref_content::ContentLibrary;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let library = ContentLibrary::builtin();

        library.validate()?;

        for language in library.languages() {
            let groups = library.menu_for(language).unwrap_or(&[]);
            let topics: usize = groups.iter().map(|g| g.topics.len()).sum();
            output.info(&format!(
                "{language}: {} groups, {topics} menu entries",
                groups.len()
            ));
        }
        output.success(&format!(
            "Catalog OK: {} documents",
            library.document_count()
        ));

        Ok(())
    }
}
