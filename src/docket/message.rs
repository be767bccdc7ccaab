use crate::docket::model::ToneStyle;
use crate::error::DocketError;
use std::fmt;
use std::str::FromStr;

/// Tones for the cease-and-desist generator, mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Calm,
    Firm,
    Severe,
    VeryHarsh,
}

pub const ALL_MESSAGE_TONES: [MessageTone; 4] = [
    MessageTone::Calm,
    MessageTone::Firm,
    MessageTone::Severe,
    MessageTone::VeryHarsh,
];

impl fmt::Display for MessageTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Calm => "calm",
            Self::Firm => "firm",
            Self::Severe => "severe",
            Self::VeryHarsh => "very-harsh",
        };
        f.write_str(text)
    }
}

impl FromStr for MessageTone {
    type Err = DocketError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "calm" => Ok(Self::Calm),
            "firm" => Ok(Self::Firm),
            "severe" => Ok(Self::Severe),
            "very-harsh" | "very harsh" => Ok(Self::VeryHarsh),
            other => Err(DocketError::Validation(format!(
                "unknown message tone \"{other}\": use calm, firm, severe, or very-harsh"
            ))),
        }
    }
}

/// Default tone derived from the user's saved tone-style preference.
pub fn tone_for_style(style: ToneStyle) -> MessageTone {
    match style {
        ToneStyle::Balanced => MessageTone::Calm,
        ToneStyle::AssertiveWomen => MessageTone::Firm,
        ToneStyle::DirectSafety => MessageTone::Severe,
    }
}

/// Render the warning message for `tone`, interpolating the optional incident
/// reference into the tone's fixed slot. The template bodies are user-facing
/// legal-adjacent correspondence; the wording is a content requirement and
/// must not drift.
pub fn generate_message(tone: MessageTone, incident_reference: Option<&str>) -> String {
    match tone {
        MessageTone::Calm => {
            let reference = incident_reference
                .map(|r| format!("Reference: {r}\n\n"))
                .unwrap_or_default();
            format!(
                "I am writing to formally request that you cease all contact with me immediately.\n\
                 \n\
                 Your continued attempts to contact me are unwanted and unwelcome. I have documented all incidents and am prepared to take legal action if this behavior continues.\n\
                 \n\
                 {reference}Please respect my request for no further contact."
            )
        }
        MessageTone::Firm => {
            let reference = incident_reference
                .map(|r| format!("I have documented this pattern of behavior, including: {r}\n\n"))
                .unwrap_or_default();
            format!(
                "This is a formal cease and desist notice.\n\
                 \n\
                 You are hereby directed to immediately stop all contact, communication, and surveillance of me. Your behavior constitutes harassment and stalking under the law.\n\
                 \n\
                 {reference}Every incident has been recorded with dates, times, and evidence. I am prepared to file for a restraining order and press criminal charges. Law enforcement will be notified of any further violations.\n\
                 \n\
                 This is your only warning. Do not contact me again."
            )
        }
        MessageTone::Severe => {
            let reference = incident_reference
                .map(|r| {
                    format!(
                        "Your actions documented in {r} and other incidents constitute criminal behavior under stalking and harassment statutes.\n\n"
                    )
                })
                .unwrap_or_default();
            format!(
                "CEASE AND DESIST - FINAL WARNING\n\
                 \n\
                 Your stalking and harassment ends immediately.\n\
                 \n\
                 {reference}I have compiled extensive evidence of your stalking behavior and am working with law enforcement. You have violated my boundaries repeatedly and your actions are illegal.\n\
                 \n\
                 If you make any further attempt to contact, follow, or surveil me, I will immediately:\n\
                 \n\
                 1. File for an emergency restraining order\n\
                 2. Press criminal charges for stalking and harassment\n\
                 3. Provide all evidence to prosecutors\n\
                 4. Pursue maximum penalties available under law\n\
                 \n\
                 Your behavior is unacceptable and criminal. This is your final warning. Any further contact will result in immediate legal action and criminal prosecution."
            )
        }
        MessageTone::VeryHarsh => {
            let reference = incident_reference
                .map(|r| {
                    format!(
                        "{r} is one of many documented incidents of your criminal stalking behavior.\n\n"
                    )
                })
                .unwrap_or_default();
            format!(
                "FINAL NOTICE - CRIMINAL CHARGES PENDING\n\
                 \n\
                 Your stalking ends NOW. There will be consequences.\n\
                 \n\
                 {reference}I have maintained detailed records of every single incident you have perpetrated - dates, times, locations, witnesses, and physical evidence. Law enforcement has been notified and is reviewing your pattern of criminal behavior.\n\
                 \n\
                 You have repeatedly violated my boundaries and my rights. Your actions are criminal stalking and harassment. I will not tolerate one more second of your behavior.\n\
                 \n\
                 If you contact me, approach me, follow me, or surveil me in any way after receiving this message, I will:\n\
                 \n\
                 \u{2022} Immediately file criminal charges with the district attorney\n\
                 \u{2022} Obtain an emergency protective order\n\
                 \u{2022} Provide prosecutors with all evidence for maximum charges\n\
                 \u{2022} Testify in court to ensure you face the full legal consequences\n\
                 \u{2022} Pursue every available civil remedy for damages\n\
                 \n\
                 I am documenting this warning. You are on notice that your criminal behavior has been reported and any further violation will result in your arrest and prosecution.\n\
                 \n\
                 You will be held accountable. Stay away from me permanently, or you will face jail time.\n\
                 \n\
                 This is not a request. This is a legal warning that you are committing crimes and will be prosecuted."
            )
        }
    }
}
