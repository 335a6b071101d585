#[cfg(test)]
mod integration_tests {
    use crate::{
        AMH, ARB, BUL, DEU, Detector, ENG, EPO, FRA, HEB, HIN, Info, ITA, NLD, Options, PES, POL,
        POR, RUS, SPA, SWE, Script, TUR, UKR, YDD, detect, detect_lang, detect_lang_with_options,
        detect_script, detect_with_options, is_reliable,
    };

    #[test]
    fn scenarios() {
        assert_eq!(detect_script("Hello, world!"), Some(Script::Latin));
        assert_eq!(detect_script("Привет всем!"), Some(Script::Cyrillic));
        assert_eq!(detect("我爱你"), Info::new(crate::CMN, Script::Han, 1.0));
        assert_eq!(
            detect("どうもありがとう"),
            Info::new(crate::JPN, Script::HiraganaKatakana, 1.0)
        );
        assert_eq!(detect_lang("Where there is a will there is a way"), Some(ENG));
        assert_eq!(detect("123456789-=?"), Info::none());
    }

    #[test]
    fn confident_detections() {
        let cases = [
            ("Where there is a will there is a way", ENG, Script::Latin),
            (
                "All evil come from a single cause ... man's inability to sit still in a room",
                ENG,
                Script::Latin,
            ),
            ("Vouloir, c'est pouvoir", FRA, Script::Latin),
            (
                "Mi ŝategas la japanan kaj studas ĝin kelkajn jarojn 😊",
                EPO,
                Script::Latin,
            ),
            (
                "La viro amas hundojn. Hundo estas la plej bona amiko de viro",
                EPO,
                Script::Latin,
            ),
            (
                "Además de todo lo anteriormente dicho, también encontramos...",
                SPA,
                Script::Latin,
            ),
            ("Buona notte e sogni d'oro!", ITA, Script::Latin),
            (
                "Der Hund schläft unter dem Tisch, weil es draußen regnet und kalt ist.",
                DEU,
                Script::Latin,
            ),
            (
                "De kinderen spelen buiten in de tuin terwijl hun ouders koffie drinken.",
                NLD,
                Script::Latin,
            ),
            (
                "Eu gosto muito de ler livros quando estou em casa com a minha família.",
                POR,
                Script::Latin,
            ),
            (
                "Bugün hava çok güzel, bu yüzden parkta yürüyüşe çıkıyoruz.",
                TUR,
                Script::Latin,
            ),
            (
                "Vi åker till landet i sommar och bor hos min mormor vid sjön.",
                SWE,
                Script::Latin,
            ),
            ("Та нічого, все нормально. А в тебе як?", UKR, Script::Cyrillic),
            (
                "Я очень люблю читать книги по вечерам, когда на улице идет дождь.",
                RUS,
                Script::Cyrillic,
            ),
            (
                "Днес времето е хубаво и ще отидем на разходка в парка.",
                BUL,
                Script::Cyrillic,
            ),
            ("बहुत बहुत (धन्यवाद / शुक्रिया)!", HIN, Script::Devanagari),
            (
                "मुझे हर शाम किताबें पढ़ना बहुत अच्छा लगता है।",
                HIN,
                Script::Devanagari,
            ),
            ("האקדמיה ללשון העברית", HEB, Script::Hebrew),
            ("אני אוהב לקרוא ספרים בערב כשיורד גשם בחוץ", HEB, Script::Hebrew),
            ("لغتي العربية ليست كما يجب", ARB, Script::Arabic),
            (
                "من دوست دارم شب\u{200c}ها کتاب بخوانم وقتی باران می\u{200c}بارد",
                PES,
                Script::Arabic,
            ),
            ("ኢትዮጵያ አፍሪቃ ውስጥ ናት", AMH, Script::Ethiopic),
        ];
        for (text, lang, script) in cases {
            let info = detect(text);
            assert_eq!(info, Info::new(lang, script, 1.0), "{text}");
            assert!(is_reliable(&info), "{text}");
        }
    }

    #[test]
    fn short_texts_are_unreliable() {
        let cases = [
            ("Tu me manques", FRA),
            ("Te echo de menos", SPA),
            ("Mi ne scias!", EPO),
            (
                "Dzisiaj jest piękna pogoda, więc idziemy na spacer do parku.",
                POL,
            ),
        ];
        for (text, lang) in cases {
            let info = detect(text);
            assert_eq!(info.lang(), Some(lang), "{text}");
            assert!(info.confidence() > 0.05, "{text}");
            assert!(!is_reliable(&info), "{text}");
        }
    }

    #[test]
    fn whitelist_narrows_candidates() {
        let text = "Mi ne scias!";
        let only_epo = Options::new().allow(EPO);
        assert_eq!(
            detect_with_options(text, &only_epo),
            Info::new(EPO, Script::Latin, 1.0)
        );

        let epo_or_eng = Options::new().with_whitelist([EPO, ENG]);
        let info = detect_with_options(text, &epo_or_eng);
        assert_eq!(info.lang(), Some(EPO));
        assert_eq!(info.confidence(), 1.0);

        // the whitelist wins even when it also appears in the blacklist
        let both = Options::new().allow(FRA).deny(FRA);
        assert_eq!(detect_lang_with_options(text, &both), Some(FRA));
    }

    #[test]
    fn blacklist_removes_candidates() {
        let text = "Where there is a will there is a way";
        let opts = Options::new().deny(ENG);
        let info = detect_with_options(text, &opts);
        assert_eq!(info.lang(), Some(DEU));
        assert!(!is_reliable(&info));
        assert!(info.confidence() < 0.1);
    }

    #[test]
    fn blacklist_can_empty_the_candidates() {
        let opts = Options::new().with_blacklist([HEB, YDD]);
        let info = detect_with_options("האקדמיה ללשון העברית", &opts);
        assert_eq!(info, Info::unknown_lang(Script::Hebrew));
        assert_eq!(info.lang(), None);
        assert_eq!(info.confidence(), 0.0);
    }

    #[test]
    fn filtered_out_script_keeps_script_only() {
        let opts = Options::new().allow(FRA);
        assert_eq!(
            detect_with_options("Та нічого, все нормально.", &opts),
            Info::unknown_lang(Script::Cyrillic)
        );
        // single-language scripts ignore the filter
        assert_eq!(
            detect_with_options("我爱你", &opts),
            Info::new(crate::CMN, Script::Han, 1.0)
        );
    }

    #[test]
    fn detector_with_options() {
        let detector = Detector::builder()
            .blacklist([crate::NLD, SWE])
            .compose_input(true)
            .build();
        let text = "All evil come from a single cause ... man's inability to sit still in a room";
        assert_eq!(detector.detect_lang(text), Some(ENG));
        // decomposed ŝ and ĝ are recomposed before scoring
        let decomposed = "Mi s\u{302}ategas la japanan kaj studas g\u{302}in kelkajn jarojn";
        assert_eq!(detector.detect_lang(decomposed), Some(EPO));
    }

    #[test]
    fn detection_is_deterministic() {
        let text = "Te echo de menos";
        let first = detect(text);
        for _ in 0..5 {
            assert_eq!(detect(text), first);
        }
    }
}
