mod threadpool;
pub use threadpool::Threads;
