use wayfarer_derive::wayfarer_error;

#[wayfarer_error]
pub enum PageError {
    #[error("Number parse error: {0}")]
    Parse(std::num::ParseIntError),
}

fn main() {}
