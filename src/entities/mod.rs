pub mod dispute_case;
pub mod dispute_case_return;
pub mod dispute_evidence;
pub mod order;
pub mod return_entity;
pub mod user_entity;
