pub mod link_token;

pub use link_token::LinkTokenIssuer;
