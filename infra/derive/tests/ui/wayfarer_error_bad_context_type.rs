use wayfarer_derive::wayfarer_error;

#[wayfarer_error]
pub enum PageError {
    #[error("Number parse error: {source}")]
    Parse { source: std::num::ParseIntError, context: Option<String> },
}

fn main() {}
