use super::Error;
use axum::http::StatusCode;

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $message:literal) => {
        pub const $name: Error<'static> = Error::new(StatusCode::$status, $code, $message);
    };
}

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "INTERNAL", "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "DATABASE_ERROR", "database error");

const_error!(JSON_MISSING_FIELDS, BAD_REQUEST, "INVALID_INPUT", "missing fields");
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "INVALID_INPUT", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "INVALID_INPUT",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "INVALID_INPUT", "invalid data");

const_error!(TEAM_EXISTS, CONFLICT, "TEAM_EXISTS", "team name already exists");
const_error!(TEAM_NOT_FOUND, NOT_FOUND, "NOT_FOUND", "team not found");
const_error!(USER_NOT_FOUND, NOT_FOUND, "NOT_FOUND", "user not found");
const_error!(
    AUTHOR_OR_TEAM_NOT_FOUND,
    NOT_FOUND,
    "NOT_FOUND",
    "author or team not found"
);

const_error!(PR_EXISTS, CONFLICT, "PR_EXISTS", "PR id already exists");
const_error!(PR_NOT_FOUND, NOT_FOUND, "NOT_FOUND", "PR not found");
const_error!(PR_MERGED, CONFLICT, "PR_MERGED", "cannot reassign on merged PR");
const_error!(
    NOT_ASSIGNED,
    CONFLICT,
    "NOT_ASSIGNED",
    "reviewer is not assigned to this PR"
);
const_error!(
    NO_CANDIDATE,
    CONFLICT,
    "NO_CANDIDATE",
    "no active replacement candidate in team"
);
