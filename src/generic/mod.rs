/*!
Generic structures, supporting but independent of the library.
*/

pub mod random;
