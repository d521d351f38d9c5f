/*!
Assorted types.
*/

pub mod err;
