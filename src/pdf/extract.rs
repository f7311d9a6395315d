use crate::errors::{AppError, AppResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Extract the plain text of every page, in page order.
///
/// Nothing is written by this function; any load or decode failure aborts
/// the import before the first row reaches the schedule. pdf-extract panics
/// on some malformed documents (missing font keys), those panics are
/// reported as a regular `AppError::Pdf`.
pub fn extract_pages(path: &Path) -> AppResult<Vec<String>> {
    if !path.is_file() {
        return Err(AppError::Pdf(format!("{} is not a file", path.display())));
    }

    // keep the default hook from dumping a panic message on the console
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_by_pages(path)
    }));
    panic::set_hook(previous_hook);

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(AppError::Pdf(format!("{}: {e}", path.display()))),
        Err(payload) => Err(AppError::Pdf(format!(
            "{}: malformed document ({})",
            path.display(),
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown decoder failure"
    }
}
