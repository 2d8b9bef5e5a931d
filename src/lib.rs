// Textbook RSA console tool
//
// Implements raw ("textbook") RSA: no padding scheme, no handling of
// messages wider than the modulus, no side-channel defenses. Without a
// padding scheme such as OAEP this construction is unsuitable for real
// confidentiality; it exists to make the arithmetic visible.

pub mod rsa;
pub mod shell;
