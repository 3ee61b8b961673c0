mod deletion_executor;

pub use deletion_executor::DeletionExecutor;
