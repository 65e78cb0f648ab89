/// Unique identifier for an entity in a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Discrete movement commands a character understands.
///
/// Run commands come in start/stop pairs; a stop exactly undoes its start so
/// that overlapping left and right holds add up correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Jump,
    StartRunLeft,
    StopRunLeft,
    StartRunRight,
    StopRunRight,
}
