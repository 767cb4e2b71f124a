mod common;
mod test_error;
