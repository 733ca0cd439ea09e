//! Static copy shown when a service cannot be reached.

use vacc_domain::vaccine::VaccineType;

pub(crate) const HOW_TO_GET_HEADING: &str = "How to get the vaccine";

const RSV_HOW_TO_GET: &str = "<p>If you're aged 75 to 79, contact your GP surgery to book \
your RSV vaccination.</p>\n<p>Your GP surgery may contact you about getting the RSV vaccine. \
This may be by letter, text, phone call or email.</p>";

const RSV_PREGNANCY_HOW_TO_GET: &str = "<p>You should be offered the RSV vaccine around the \
time of your 28-week antenatal appointment.</p>\n<p>If you're 28 weeks pregnant or more and \
have not been offered the vaccine, speak to your maternity service or GP surgery.</p>";

const TD_IPV_HOW_TO_GET: &str = "<p>The 3-in-1 teenage booster is usually given at school in \
year 9.</p>\n<p>If you missed it, contact your GP surgery to book an appointment.</p>";

const RSV_ELIGIBILITY: &str = "<h2>Who should have the RSV vaccine</h2>\n<p>The RSV vaccine is \
recommended if you're:</p>\n<ul>\n<li>aged 75 to 79</li>\n<li>pregnant (from 28 weeks)</li>\n\
</ul>\n<p>We cannot show whether you can have the vaccine right now.</p>";

pub(crate) const RSV_PREGNANCY_ELIGIBILITY: &str = "<h2>Who should have the RSV vaccine in \
pregnancy</h2>\n<p>It's recommended that you have the RSV vaccine if you're 28 weeks pregnant \
or more. It helps protect your baby from RSV for the first few months after they're born.</p>";

pub(crate) const fn how_to_get_markup(vaccine: VaccineType) -> &'static str {
    match vaccine {
        VaccineType::Rsv => RSV_HOW_TO_GET,
        VaccineType::RsvPregnancy => RSV_PREGNANCY_HOW_TO_GET,
        VaccineType::TdIpv3In1 => TD_IPV_HOW_TO_GET,
    }
}

pub(crate) const fn eligibility_markup(vaccine: VaccineType) -> &'static str {
    match vaccine {
        VaccineType::Rsv => RSV_ELIGIBILITY,
        VaccineType::RsvPregnancy => RSV_PREGNANCY_ELIGIBILITY,
        VaccineType::TdIpv3In1 => "",
    }
}
