use super::const_error;

const_error!(DATABASE_ERROR, 1, "database error");
const_error!(CONSTRAINT_VIOLATION, 2, "constraint violation", constraint);
const_error!(MISSING_FIELD, 3, "required field is missing", constraint);
const_error!(
    DUPLICATE_SUBMISSION,
    4,
    "submission with this model tag and revision already exists",
    constraint
);
const_error!(PROJECT_NOT_FOUND, 5, "project does not exist", constraint);
const_error!(AUTHOR_NOT_FOUND, 6, "author does not exist", constraint);
const_error!(MISSING_DATABASE_URL, 7, "DATABASE_URL is not set");
const_error!(INVALID_CONFIG, 8, "invalid configuration value");
