//! Payment methods and banks offered on the gateway's checkout page.

use serde::Serialize;

/// One selectable `vnp_BankCode`. An empty code lets the customer choose
/// on the gateway page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bank {
    pub code: &'static str,
    pub name: &'static str,
}

const fn bank(code: &'static str, name: &'static str) -> Bank {
    Bank { code, name }
}

pub const SUPPORTED_BANKS: &[Bank] = &[
    bank("", "Cổng thanh toán VNPAYQR"),
    bank("VNPAYQR", "Thanh toán qua ứng dụng hỗ trợ VNPAYQR"),
    bank("VNBANK", "Thanh toán qua ứng dụng ngân hàng nội địa"),
    bank("INTCARD", "Thanh toán qua thẻ quốc tế"),
    bank("VIETQR", "Thanh toán qua VietQR"),
    bank("NCB", "Ngân hàng NCB"),
    bank("VIETCOMBANK", "Ngân hàng Vietcombank"),
    bank("VIETINBANK", "Ngân hàng VietinBank"),
    bank("BIDV", "Ngân hàng BIDV"),
    bank("AGRIBANK", "Ngân hàng Agribank"),
    bank("SACOMBANK", "Ngân hàng SacomBank"),
    bank("TECHCOMBANK", "Ngân hàng Techcombank"),
    bank("ACB", "Ngân hàng ACB"),
    bank("VPBANK", "Ngân hàng VPBank"),
    bank("TPBANK", "Ngân hàng TPBank"),
    bank("MBBANK", "Ngân hàng MBBank"),
    bank("SCB", "Ngân hàng SCB"),
    bank("VIB", "Ngân hàng VIB"),
    bank("SHB", "Ngân hàng SHB"),
];

pub fn supported_banks() -> &'static [Bank] {
    SUPPORTED_BANKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = SUPPORTED_BANKS.iter().map(|b| b.code).collect();
        assert_eq!(codes.len(), SUPPORTED_BANKS.len());
    }

    #[test]
    fn first_entry_is_gateway_choice() {
        assert_eq!(supported_banks()[0].code, "");
    }
}
