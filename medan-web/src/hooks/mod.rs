pub mod remote_list;

pub use remote_list::use_remote_list;
