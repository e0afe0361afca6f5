use std::io;
use std::path::PathBuf;

use fastapi_helper::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::NotFound { path: PathBuf::from("src/core/settings.py") };
    assert_eq!(err.to_string(), "File does not exist: 'src/core/settings.py'.");

    let err = Error::TagNotFound {
        tag: "import sqlalchemy as sa".to_string(),
        path: PathBuf::from("alembic/script.py.mako"),
    };
    assert_eq!(
        err.to_string(),
        "Tag 'import sqlalchemy as sa' was not found in 'alembic/script.py.mako'."
    );
}

#[test]
fn test_step_wrapping() {
    let err = Error::ProcessError {
        command: "uv init --bare".to_string(),
        reason: "exited with status: exit status: 2".to_string(),
    }
    .in_step("Initializing project");

    assert_eq!(
        err.to_string(),
        "Initializing project failed: Command 'uv init --bare' failed: exited with status: exit status: 2."
    );
    assert!(matches!(err.root_cause(), Error::ProcessError { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
