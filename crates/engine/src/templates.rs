//! Response template catalog
//!
//! One template set per intent family, with per-language variants. English
//! is always authored; Sinhala and Tamil are fully authored; Chinese and
//! French are only partially authored, so those languages degrade to the
//! English text for the remaining families. Degradation is a
//! data-completeness warning, never a user-visible failure.
//!
//! `{location}` and `{guide}` placeholders are filled by the dispatcher.

use tourbot_core::Language;

/// Per-language variants of one response family
pub struct TemplateSet {
    family: &'static str,
    en: &'static str,
    si: Option<&'static str>,
    ta: Option<&'static str>,
    zh: Option<&'static str>,
    fr: Option<&'static str>,
}

impl TemplateSet {
    /// Template for the given language, degrading to English when the
    /// language has no authored text for this family.
    pub fn select(&self, language: Language) -> &'static str {
        let authored = match language {
            Language::English => Some(self.en),
            Language::Sinhala => self.si,
            Language::Tamil => self.ta,
            Language::Chinese => self.zh,
            Language::French => self.fr,
        };
        match authored {
            Some(text) => text,
            None => {
                tracing::warn!(
                    family = self.family,
                    language = language.code(),
                    "no localized template, falling back to English"
                );
                self.en
            }
        }
    }

    /// Whether the family has authored text for the language.
    pub fn is_localized(&self, language: Language) -> bool {
        match language {
            Language::English => true,
            Language::Sinhala => self.si.is_some(),
            Language::Tamil => self.ta.is_some(),
            Language::Chinese => self.zh.is_some(),
            Language::French => self.fr.is_some(),
        }
    }
}

pub static GREETING: TemplateSet = TemplateSet {
    family: "greeting",
    en: "What would you like to explore today? I can tell you about \
         attractions, food, transport, hotels and the weather.",
    si: Some(
        "අද මොනාද ගවේෂණය කරන්න කැමති? ආකර්ෂණ, ආහාර, ප්‍රවාහනය, හෝටල් සහ \
         කාලගුණය ගැන මට කියන්න පුළුවන්.",
    ),
    ta: Some(
        "இன்று என்ன ஆராய விரும்புகிறீர்கள்? இடங்கள், உணவு, போக்குவரத்து, \
         ஹோட்டல்கள் மற்றும் வானிலை பற்றி நான் சொல்ல முடியும்.",
    ),
    zh: None,
    fr: None,
};

pub static ATTRACTION_OVERVIEW: TemplateSet = TemplateSet {
    family: "attraction_overview",
    en: "Sri Lanka has amazing attractions! Some must-visit places: Sigiriya, \
         the ancient rock fortress; Kandy and the Temple of the Tooth; Galle \
         Fort's colonial streets; Yala National Park for a wildlife safari; \
         and Ella up in the scenic hill country.",
    si: Some(
        "ශ්‍රී ලංකාවේ විස්මයජනක ආකර්ෂණ තියෙනවා! යන්න ඕනේ ස්ථාන: සීගිරිය පුරාණ \
         පර්වත කොටුව, මහනුවර දළදා මාලිගාව, ගාල්ල කොටුව, යාල ජාතික වනෝද්‍යානය \
         සහ ඇල්ල කඳුකර ප්‍රදේශය.",
    ),
    ta: Some(
        "இலங்கையில் அற்புதமான இடங்கள் உள்ளன! பார்க்க வேண்டியவை: சிகிரியா பாறைக் \
         கோட்டை, கண்டி புனித பல் கோவில், காலி கோட்டை, யால தேசிய பூங்கா மற்றும் \
         எல்ல மலைநாடு.",
    ),
    zh: None,
    fr: None,
};

pub static ATTRACTION_DETAIL: TemplateSet = TemplateSet {
    family: "attraction_detail",
    en: "{location} is one of Sri Lanka's must-see stops! Plan a morning \
         visit to beat the heat and the crowds, and set aside a few hours to \
         take it in properly.",
    si: Some(
        "{location} ශ්‍රී ලංකාවේ අනිවාර්යයෙන් බලන්න ඕනේ ස්ථානයක්! රස්නය සහ \
         සෙනඟ මග හැරීමට උදෑසන යන්න, හොඳින් බලන්න පැය කිහිපයක් වෙන් කරන්න.",
    ),
    ta: Some(
        "{location} இலங்கையில் கண்டிப்பாக பார்க்க வேண்டிய இடம்! வெயிலையும் \
         கூட்டத்தையும் தவிர்க்க காலையில் செல்லுங்கள், நன்றாக பார்க்க சில மணி \
         நேரம் ஒதுக்குங்கள்.",
    ),
    zh: None,
    fr: None,
};

pub static FOOD: TemplateSet = TemplateSet {
    family: "food",
    en: "Sri Lankan cuisine is amazing! Try rice and curry, hoppers, kottu \
         and string hoppers. Don't miss the coconut-based curries and spicy \
         sambols!",
    si: Some(
        "ශ්‍රී ලාංකික ආහාර විස්මයජනකයි! බත් සහ කරි, ආප්ප, කොත්තු, ඉදිආප්ප \
         අත්දකින්න. පොල් කිරි කරි සහ සම්බෝල් අමතක කරන්න එපා!",
    ),
    ta: Some(
        "இலங்கை உணவு அற்புதமானது! சாதமும் கறியும், ஆப்பம், கொத்து மற்றும் \
         இடியாப்பம் சுவைத்துப் பாருங்கள். தேங்காய் கறிகளையும் காரமான \
         சம்பல்களையும் தவறவிடாதீர்கள்!",
    ),
    zh: None,
    fr: None,
};

pub static TRANSPORT: TemplateSet = TemplateSet {
    family: "transport",
    en: "Getting around is easy: trains offer scenic journeys (book via \
         railway.gov.lk), buses cover an extensive network with cash fares, \
         tuk-tuks handle short hops if you negotiate the fare, and domestic \
         flights connect the main hubs.",
    si: Some(
        "ගමන් කිරීම පහසුයි: දුම්රිය සුන්දර ගමන් සඳහා (railway.gov.lk හරහා), \
         බස් පුළුල් ජාලයක් මුදල් ගෙවීමෙන්, ත්‍රීරෝද රථ කෙටි දුර ගාස්තු සාකච්ඡා \
         කර, ගුවන් ගමන් ප්‍රධාන නගර සම්බන්ධ කරයි.",
    ),
    ta: Some(
        "சுற்றுவது எளிது: ரயில்கள் அழகான பயணங்களுக்கு (railway.gov.lk வழியாக), \
         பேரூந்துகள் பரந்த வலையமைப்பில் பணக் கட்டணத்தில், ஆட்டோக்கள் குறுகிய \
         தூரத்துக்கு கட்டணம் பேசி, உள்நாட்டு விமானங்கள் முக்கிய நகரங்களை \
         இணைக்கின்றன.",
    ),
    zh: None,
    fr: None,
};

pub static ACCOMMODATION: TemplateSet = TemplateSet {
    family: "accommodation",
    en: "Sri Lanka offers every kind of stay: beach resorts in Bentota and \
         Hikkaduwa, hill country hotels in Kandy and Nuwara Eliya, boutique \
         hotels inside Galle Fort, budget-friendly guesthouses everywhere, \
         and eco lodges near the national parks.",
    si: Some(
        "ශ්‍රී ලංකාවේ විවිධ නවාතැන් විකල්ප: බෙන්තොට සහ හික්කඩුවේ වෙරළ නිකේතන, \
         මහනුවර සහ නුවරඑළියේ කඳුකර හෝටල්, ගාල්ල කොටුවේ බුටික් හෝටල්, අඩු මිල \
         ගෘහ නවාතැන් සහ ජාතික වනෝද්‍යාන අසල පරිසර නවාතැන්.",
    ),
    ta: Some(
        "இலங்கையில் எல்லா வகையான தங்குமிடங்களும் உள்ளன: பெந்தோட்டை கடற்கரை \
         ரிசார்ட்டுகள், கண்டி மற்றும் நுவரெலியா மலை ஹோட்டல்கள், காலி கோட்டை \
         பூட்டிக் ஹோட்டல்கள், மலிவான விருந்தினர் இல்லங்கள் மற்றும் தேசிய \
         பூங்காக்களுக்கு அருகிலுள்ள சுற்றுச்சூழல் தங்குமிடங்கள்.",
    ),
    zh: None,
    fr: None,
};

pub static WEATHER: TemplateSet = TemplateSet {
    family: "weather",
    en: "Sri Lanka has a tropical climate: the dry season runs December to \
         April on the west and south coasts, the monsoons sweep the \
         southwest May to September and the northeast October to March, and \
         temperatures hold at 26-30°C year-round. Best beach weather is \
         November to April.",
    si: Some(
        "ශ්‍රී ලංකාවේ නිවර්තන දේශගුණයක්: වියලි කාලය දෙසැම්බර් සිට අප්‍රේල් \
         (බටහිර/දකුණු වෙරළ), මෝසම් මැයි සිට සැප්තැම්බර් (නිරිතදිග) සහ ඔක්තෝබර් \
         සිට මාර්තු (ඊසානදිග), උෂ්ණත්වය වසර පුරා 26-30°C. හොඳම වෙරළ කාලගුණය \
         නොවැම්බර් සිට අප්‍රේල්.",
    ),
    ta: Some(
        "இலங்கையில் வெப்பமண்டல காலநிலை: வறண்ட காலம் டிசம்பர் முதல் ஏப்ரல் வரை \
         (மேற்கு/தெற்கு கடற்கரை), பருவமழை மே முதல் செப்டம்பர் (தென்மேற்கு) \
         மற்றும் அக்டோபர் முதல் மார்ச் (வடகிழக்கு), வெப்பநிலை ஆண்டு முழுவதும் \
         26-30°C. சிறந்த கடற்கரை காலம் நவம்பர் முதல் ஏப்ரல் வரை.",
    ),
    zh: None,
    fr: None,
};

pub static HELP: TemplateSet = TemplateSet {
    family: "help",
    en: "I'm here to help you explore Sri Lanka! Ask me about attractions \
         and historical sites, local food and where to try it, trains, buses \
         and taxis, hotels and guesthouses, or the weather and the best \
         travel times.",
    si: Some(
        "ශ්‍රී ලංකාව ගවේෂණය කිරීමට මම උදව් කරන්නම්! ආකර්ෂණ සහ ඓතිහාසික ස්ථාන, \
         දේශීය ආහාර, දුම්රිය, බස් සහ ටැක්සි, හෝටල් සහ ගෘහ නවාතැන්, කාලගුණය සහ \
         හොඳම ගමන් කාල ගැන අහන්න.",
    ),
    ta: Some(
        "இலங்கையை ஆராய நான் உதவுகிறேன்! இடங்கள் மற்றும் வரலாற்று தளங்கள், \
         உள்ளூர் உணவு, ரயில்கள், பேரூந்துகள் மற்றும் டாக்ஸிகள், ஹோட்டல்கள், \
         வானிலை மற்றும் சிறந்த பயண நேரங்கள் பற்றி கேளுங்கள்.",
    ),
    zh: None,
    fr: None,
};

pub static FOLLOW_UP: TemplateSet = TemplateSet {
    family: "follow_up",
    en: "Happy to keep going! What else would you like to know — another \
         place, food, transport or somewhere to stay?",
    si: Some(
        "තව කියන්න සතුටුයි! තවත් මොනාද දැන ගන්න කැමති — වෙනත් ස්ථානයක්, ආහාර, \
         ප්‍රවාහනය හෝ නවාතැන්?",
    ),
    ta: Some(
        "மேலும் சொல்ல மகிழ்ச்சி! வேறு என்ன தெரிந்து கொள்ள விரும்புகிறீர்கள் — \
         வேறு இடம், உணவு, போக்குவரத்து அல்லது தங்குமிடம்?",
    ),
    zh: None,
    fr: None,
};

pub static CLARIFICATION: TemplateSet = TemplateSet {
    family: "clarification",
    en: "Let me put that another way. Tell me which part I should explain \
         again — the place, the prices, or how to get there — and I'll keep \
         it simple.",
    si: Some(
        "මම ඒක වෙනත් විදිහකට කියන්නම්. නැවත පැහැදිලි කරන්න ඕනේ කොටස කියන්න — \
         ස්ථානය, මිල ගණන් හෝ යන විදිහ — මම සරලව කියන්නම්.",
    ),
    ta: Some(
        "அதை வேறு விதமாக சொல்கிறேன். எந்தப் பகுதியை மீண்டும் விளக்க வேண்டும் \
         என்று சொல்லுங்கள் — இடம், விலை அல்லது செல்லும் வழி — எளிமையாக \
         சொல்கிறேன்.",
    ),
    zh: None,
    fr: None,
};

pub static FAREWELL: TemplateSet = TemplateSet {
    family: "farewell",
    en: "Thank you for chatting with me! Have a wonderful time exploring Sri \
         Lanka! — {guide}",
    si: Some(
        "මා සමඟ කතා කිරීමට ස්තූතියි! ශ්‍රී ලංකාව ගවේෂණය කරන්න ලස්සන කාලයක් ගත \
         කරන්න! — {guide}",
    ),
    ta: Some(
        "என்னுடன் பேசியதற்கு நன்றி! இலங்கையை ஆராய்வதில் அற்புதமான நேரத்தைப் \
         பெறுங்கள்! — {guide}",
    ),
    zh: Some("谢谢您与我聊天！祝您在斯里兰卡探索愉快！— {guide}"),
    fr: Some(
        "Merci d'avoir discuté avec moi! Passez un merveilleux moment à \
         explorer le Sri Lanka! — {guide}",
    ),
};

pub static UNKNOWN: TemplateSet = TemplateSet {
    family: "unknown",
    en: "I'm not sure I understand that completely. Could you tell me more \
         about what you'd like to know about Sri Lanka? I can help with \
         attractions, food, transport, accommodation and more!",
    si: Some(
        "මට ඒක සම්පූර්ණයෙන්ම තේරුම් වෙන්නේ නෑ. ශ්‍රී ලංකාව ගැන ඔබ දැන ගන්න \
         කැමති දේ ගැන තව කියන්න පුළුවන්ද? මට ආකර්ෂණ, ආහාර, ප්‍රවාහනය, නවාතැන් \
         ගැන උදව් කරන්න පුළුවන්!",
    ),
    ta: Some(
        "அது எனக்கு முழுமையாக புரியவில்லை. இலங்கையைப் பற்றி நீங்கள் தெரிந்து \
         கொள்ள விரும்புவதைப் பற்றி மேலும் சொல்ல முடியுமா? இடங்கள், உணவு, \
         போக்குவரத்து, தங்குமிடம் பற்றி உதவ முடியும்!",
    ),
    zh: Some(
        "我不太理解。您能告诉我更多关于您想了解斯里兰卡什么的信息吗？\
         我可以帮助您了解景点、美食、交通、住宿等等！",
    ),
    fr: Some(
        "Je ne comprends pas complètement. Pourriez-vous me dire ce que vous \
         aimeriez savoir sur le Sri Lanka? Je peux vous aider avec les \
         attractions, la nourriture, le transport, l'hébergement et plus \
         encore!",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_localized_families() {
        for set in [&GREETING, &FOOD, &WEATHER, &HELP, &FAREWELL, &UNKNOWN] {
            assert!(set.is_localized(Language::English));
            assert!(set.is_localized(Language::Sinhala));
            assert!(set.is_localized(Language::Tamil));
        }
    }

    #[test]
    fn test_partial_localization_degrades_to_english() {
        assert!(!FOOD.is_localized(Language::Chinese));
        assert_eq!(FOOD.select(Language::Chinese), FOOD.select(Language::English));

        assert!(!TRANSPORT.is_localized(Language::French));
        assert_eq!(
            TRANSPORT.select(Language::French),
            TRANSPORT.select(Language::English)
        );
    }

    #[test]
    fn test_localized_families_stay_localized() {
        assert!(UNKNOWN.is_localized(Language::Chinese));
        assert!(FAREWELL.is_localized(Language::French));
        assert_ne!(UNKNOWN.select(Language::Chinese), UNKNOWN.en);
    }

    #[test]
    fn test_placeholders_present() {
        assert!(ATTRACTION_DETAIL.select(Language::English).contains("{location}"));
        assert!(ATTRACTION_DETAIL.select(Language::Sinhala).contains("{location}"));
        assert!(FAREWELL.select(Language::Tamil).contains("{guide}"));
    }
}
