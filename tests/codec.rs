#[path = "codec/decode.rs"]
mod decode;
#[path = "codec/dictionary.rs"]
mod dictionary;
#[path = "codec/encode.rs"]
mod encode;
