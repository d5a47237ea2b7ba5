use wayfarer_derive::wayfarer_error;

#[wayfarer_error]
pub struct PageError {
    message: String,
}

fn main() {}
