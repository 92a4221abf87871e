pub mod arithmetic;
pub mod logic;
pub mod sequence;
pub mod text;
pub mod variant;

// Functions here are free helpers over `Value`; the registry in
// `builtins` owns dispatch and arity checks
