use otsav_derive::otsav_error;
use std::borrow::Cow;

#[otsav_error]
pub enum StoreError {
    #[error("Store I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: StoreError = "boom".into();
    let _ = format!("{err}");
}
