/// Format tag assumed when a peer does not name one.
///
/// The tag travels on every raw message so the encoding layer can pick the
/// same wire representation for the reply that the call arrived in.
pub const DEFAULT_FORMAT_TAG: &str = "json";
