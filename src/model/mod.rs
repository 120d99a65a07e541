/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Authenticated HTTP transport, one round trip per call
pub mod http;
/// Request descriptors for the buyback endpoints
pub mod requests;
/// Raw API responses
pub mod responses;
