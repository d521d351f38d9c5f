/*!
Miscellaneous --- here, only support for logging.
*/

pub mod log;
