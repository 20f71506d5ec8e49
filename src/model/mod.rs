/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP request helper shared by every provider
pub mod http;
/// Price, rotation and profile rows
pub mod records;
/// Request bodies sent to providers
pub mod requests;
/// Response models from provider calls
pub mod responses;
/// Rotation pointer arithmetic
pub mod rotation;
