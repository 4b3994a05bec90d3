//! Fixed identifiers of the MyInvois enveloped XAdES signature profile.
//!
//! The external signer owns the XML; these are the values it embeds alongside the parameters
//! assembled here.
pub const UBL_EXTENSION_URI: &str = "urn:oasis:names:specification:ubl:dsig:enveloped:xades";
pub const SIGNATURE_INFORMATION_ID: &str = "urn:oasis:names:specification:ubl:signature:1";
pub const REFERENCED_SIGNATURE_ID: &str = "urn:oasis:names:specification:ubl:signature:Invoice";
pub const SIGNATURE_ID: &str = "signature";
pub const SIGNED_PROPERTIES_ID: &str = "id-xades-signed-props";

pub const SIGNATURE_METHOD: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256";
pub const DIGEST_METHOD: &str = "http://www.w3.org/2001/04/xmlenc#sha256";
pub const SIGNED_PROPERTIES_TYPE: &str = "http://uri.etsi.org/01903/v1.3.2#SignedProperties";

pub const DS_NS: &str = "http://www.w3.org/2000/09/xmldsig#";
pub const XADES_NS: &str = "http://uri.etsi.org/01903/v1.3.2#";
