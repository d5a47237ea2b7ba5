use wayfarer_derive::wayfarer_error;

#[wayfarer_error]
pub enum PageError {
    #[error("Number parse error: {source}")]
    Parse {
        #[source]
        source: std::num::ParseIntError,
    },
}

fn main() {}
