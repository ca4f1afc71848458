/// A record owned by the backend and addressed by its identifier.
///
/// Identifiers are held as strings regardless of how the backend encodes
/// them (see [`super::wire::de_id`]).
pub trait Identified {
    fn id(&self) -> &str;
}
