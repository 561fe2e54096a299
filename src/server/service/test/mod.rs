use crate::server::error::AppError;


/// Unwraps the error into the domain error produced by the services under test.
fn assignment_error(err: AppError) -> crate::server::error::assignment::AssignmentError {
    match err {
        AppError::AssignmentErr(e) => e,
        other => panic!("expected assignment error, got {:?}", other),
    }
}

fn operator_error(err: AppError) -> crate::server::error::operator::OperatorError {
    match err {
        AppError::OperatorErr(e) => e,
        other => panic!("expected operator error, got {:?}", other),
    }
}
