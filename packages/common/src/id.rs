use uuid::Uuid;

/// Build a new record identifier: `{prefix}_{uuidv7}`.
///
/// UUIDv7 is time-ordered, so identifiers still sort by creation time while
/// staying unique for records created within the same millisecond.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::now_v7().simple())
}
