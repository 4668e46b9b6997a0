//! SOAP envelope example synthesis
//!
//! Deterministic text templates parameterized only by the operation name.
//! The examples do not reflect actual payload shapes; callers must not
//! rely on them for anything beyond illustration.

/// Request envelope wrapping an empty element named after the operation
pub(crate) fn request_envelope(operation: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Header>
        <!-- Optional SOAP headers -->
    </soap:Header>
    <soap:Body>
        <{operation} xmlns="http://example.com/service">
            <!-- Request parameters -->
        </{operation}>
    </soap:Body>
</soap:Envelope>"#
    )
}

/// Success envelope wrapping an element named `<operation>Response`
pub(crate) fn response_envelope(operation: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Body>
        <{operation}Response xmlns="http://example.com/service">
            <!-- Response data -->
        </{operation}Response>
    </soap:Body>
</soap:Envelope>"#
    )
}

/// Constant fault envelope, independent of the operation
pub(crate) fn fault_envelope() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Body>
        <soap:Fault>
            <faultcode>soap:Server</faultcode>
            <faultstring>Server Error</faultstring>
            <detail>
                <!-- Fault details -->
            </detail>
        </soap:Fault>
    </soap:Body>
</soap:Envelope>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_names_operation() {
        let envelope = request_envelope("GetUser");
        assert!(envelope.contains("<GetUser xmlns=\"http://example.com/service\">"));
        assert!(envelope.contains("</GetUser>"));
        assert!(envelope.contains("<soap:Header>"));
    }

    #[test]
    fn test_response_envelope_appends_response_suffix() {
        let envelope = response_envelope("GetUser");
        assert!(envelope.contains("<GetUserResponse xmlns=\"http://example.com/service\">"));
        assert!(envelope.contains("</GetUserResponse>"));
    }

    #[test]
    fn test_fault_envelope_is_constant() {
        let envelope = fault_envelope();
        assert!(envelope.contains("<faultcode>soap:Server</faultcode>"));
        assert!(envelope.contains("<faultstring>Server Error</faultstring>"));
    }
}
