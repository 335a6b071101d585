// Generated offline from reference corpora. Do not edit by hand.
// Each table lists trigrams by descending corpus frequency (index = rank).

// Latin
pub const ENG: &[&str] = &[
    " th", "the", "nd ", " an", "he ", "and", "her", "d t", "er ", " to",
    "s a", "re ", "t t", "ll ", "ed ", "at ", "in ", "e t", "e a", " wi",
    "to ", "oth", "ld ", "is ", "ing", "hat", "all", " be", "y a", "ver",
    "tha", "on ", "ng ", "ir ", "hei", "eir", " is", " in", "wit", "th ",
    "one", "not", "ne ", "n t", "ith", "ion", "ery", "ere", "e w", "e i",
    "d s", " wh", " we", " sh", " re", " or", " no", " mo", " ha", " al",
    "ut ", "ty ", "ts ", "ry ", "rig", "r s", "or ", "of ", "mor", "ly ",
    "l t", "hou", "hey", "hem", "ey ", "end", "en ", "em ", "e s", "e r",
    "d w", "be ", "ay ", "ave", "al ", " sl", " se", " ri", " of", " ar",
    " a ", "y w", "y o", "wil", "we ", "ve ", "ur ", "uld", "tio", "tho",
    "thi", "sla", "rit", "rea", "r o", "out", "our", "oul", "ort", "ook",
    "old", "n a", "lav", "l o", "l b", "ks ", "ked", "ill", "igh", "ght",
    "for", "eve", "ent", "e h", "day", "d i", "as ", "are", "ard", " wa",
    " ot", " fr", " ev", " en", " co", "ys ", "you", "yon", "y t", "y s",
    "whe", "wha", "way", "war", "us ", "uri", "ude", "ual", "tud", "tin",
    "tim", "tic", "tea", "te ", "t w", "t o", "t i", "son", "sho", "sha",
    "se ", "s t", "ryo", "rty", "rth", "riv", "ree", "r w", "r t", "r n",
    "r f", "pro", "per", "pen", "orn", "ore", "ope", "oli", "oks", "o o",
    "ny ", "nt ", "n s", "ms ", "mil", "me ", "man", "m t", "led", "l h",
    "ive", "ity", "ite", "it ", "ind", "ime", "igi", "ien", "hts", "hoo",
    "hin", "hen", "hal", "had", "h t", "g t", "fre", "ert", "ead", "eac",
    "e p", "e o", "e l", "e e", "e d", "ds ", "de ", "d r", "d f", "d a",
    "col", "che", "ce ", "cal", "by ", "boo", "ber", "ays", "ati", "any",
    "ang", "an ", "ad ", "ach", "a w", " yo", " wo", " us", " ti", " te",
    " st", " sp", " pr", " pe", " op", " on", " lo", " li", " la", " fo",
    " di", " de", " by", " bo", " at", " as", "yea", "y m", "y k", "y h",
    "y f", "wri", "wou", "wor", "wly", "who", "wer", "wed", "wea", "was",
    "wal", "vit", "ved", "usu", "use", "uma", "uic", "uch", "uag", "u f",
    "tus", "tti", "tte", "tra", "tow", "tom", "tol", "tod", "tle", "tit",
    "ter", "ted", "teb", "tat", "tan", "t y", "t m", "t f", "t e", "t d",
];

pub const FRA: &[&str] = &[
    "es ", " de", " le", "nt ", "de ", "ent", "les", "et ", " qu", " et",
    "ue ", "s l", "que", "us ", "tre", "t d", "s d", "s a", "ns ", " la",
    " en", "s e", "re ", "le ", "la ", "ion", "e t", "t l", "son", "res",
    "on ", "leu", "it ", "ien", "eur", "en ", "e s", "e n", "e l", "ce ",
    " to", " il", "és ", "ur ", "tou", "s p", "rs ", "ous", "ne ", " so",
    " se", " pe", " ma", " au", "ont", "ls ", "ir ", "ils", "ers", "ais",
    "aie", " à ", " no", " li", " d ", " av", "à l", "vai", "utr", "té ",
    "ts ", "tio", "te ", "t q", "t p", "sse", "sen", "se ", "s s", "s q",
    "roi", "pen", "ouv", "out", "our", "ons", "nou", "is ", "e r", "e p",
    "e o", "e e", "ava", "aut", "ati", "ans", "ait", " re", " pr", " pl",
    " pa", " ou", " es", " a ", "vec", "ute", "urs", "un ", "u i", "tem",
    "ser", "san", "rir", "qu ", "plu", "ou ", "ort", "oit", "oir", "nce",
    "n e", "n d", "mai", "lus", "lle", "lib", "ens", "ema", "ec ", "e c",
    "e a", "dro", "dan", "d o", "cou", "cla", "cha", "ave", "ass", "ant",
    "a r", " vi", " un", " tr", " te", " sa", " na", " dr", " di", " co",
    " ce", "îtr", "êtr", "éco", "é e", "é d", "ès ", "ère", "vit", "vie",
    "ver", "ven", "uve", "ut ", "une", "uis", "ui ", "u e", "u d", "tu ",
    "tin", "t à", "t v", "t s", "t f", "t a", "sou", "sai", "s ê", "s é",
    "s u", "s n", "rès", "rté", "rso", "riv", "ret", "rat", "rai", "r l",
    "r a", "qui", "pui", "ps ", "pré", "pin", "per", "pas", "par", "oul",
    "opi", "onn", "nte", "nse", "nne", "nit", "nio", "nai", "n s", "n p",
    "mps", "men", "maî", "mar", "man", "loi", "l n", "jou", "ivi", "ité",
    "itu", "its", "iss", "isa", "ire", "ini", "in ", "ill", "il ", "igi",
    "ibe", "ge ", "for", "fai", "ess", "ert", "era", "emp", "e q", "e m",
    "e f", "e d", "dem", "d e", "cun", "ber", "aît", "auc", "ard", "arc",
    "and", "anc", "ale", "ain", "age", "ace", "a v", "a p", "a m", "a d",
    " êt", " éc", " vo", " tu", " ri", " ra", " po", " op", " ne", " jo",
    " fr", " fa", " dé", " do", " da", " ch", "ûre", "éva", "éta", "ése",
    "élè", "éjà", "éga", "ées", "ée ", "écr", "écl", "ève", "âch", "à t",
    "à a", "y a", "xe ", "x e", "vés", "vri", "vre", "vou", "von", "voi",
];

pub const DEU: &[&str] = &[
    "en ", "er ", "ie ", "nd ", "der", " un", "und", "sch", "die", " di",
    " si", "ten", "n s", "in ", "hre", "cht", "che", " ge", " da", "sie",
    "nde", "n w", "it ", "gen", "eit", " wi", " an", "ver", "ich", "den",
    " we", " so", " sc", " ha", " de", "te ", "s s", "rei", "rde", "n u",
    "hen", "e i", "d d", " ve", " me", " ih", "zu ", "wir", "wer", "t d",
    "st ", "ss ", "son", "rge", "ren", "r s", "r h", "on ", "ode", "nen",
    "n d", "men", "lte", "le ", "ist", "ind", "ihr", "ige", "ht ", "hne",
    "her", "hat", "es ", "erk", "ens", "ein", "ehr", "ech", "e m", "e a",
    "das", "ch ", "ben", "ass", "and", "an ", " zu", " re", " od", " le",
    " in", " al", "tte", "tig", "t u", "t a", "rin", "rec", "re ", "rbe",
    "r z", "r e", "ons", "ohn", "nst", "nsc", "n i", "n g", "n b", "lle",
    "ler", "lei", "ir ", "hei", "ft ", "fre", "eri", "ere", "erd", "ei ",
    "ede", "e z", "e w", "de ", "ber", "bei", "at ", "am ", "alt", "ach",
    " ni", " fr", " es", " ei", " be", " au", "ürd", "übe", "zei", "wür",
    "ung", "unf", "uf ", "uch", "u s", "tis", "ter", "t h", "t b", "sti",
    "sse", "spr", "sol", "sin", "sen", "se ", "s w", "s d", "rer", "r o",
    "r l", "org", "oll", "ns ", "nic", "nge", "ng ", "nft", "ne ", "n v",
    "n m", "mor", "mit", "ls ", "leh", "kin", "ken", "jed", "ite", "isc",
    "ion", "ing", "ihe", "ies", "ied", "ibe", "hte", "hr ", "hau", "h a",
    "ges", "ger", "gem", "geh", "geb", "ese", "ers", "ern", "end", "ema",
    "em ", "eis", "eih", "eib", "ehe", "ebe", "e v", "e u", "e s", "e l",
    "e k", "e d", "dar", "d s", "d l", "d g", "d f", "cha", "bt ", "beg",
    "aut", "auf", "att", "as ", "arb", "als", "ale", "abe", " ze", " wü",
    " wa", " vo", " sp", " oh", " na", " mo", " mi", " la", " ki", " je",
    " is", " he", " gi", " fl", " am", "ünd", "üle", "üde", "üch", "öse",
    "öge", "öff", "ät ", "äru", "äch", "ßig", "ßen", "zie", "zia", "zeu",
    "wo ", "wis", "wil", "wie", "wic", "wei", "weg", "was", "war", "wa ",
    "vor", "von", "vie", "utt", "utf", "ute", "uss", "urt", "unt", "uns",
    "ule", "ugu", "u ö", "u d", "twa", "ts ", "tio", "tfa", "tet", "tan",
    "tag", "t w", "t v", "t s", "t o", "t n", "t k", "t g", "ste", "sta",
];

pub const SPA: &[&str] = &[
    "os ", " de", "que", " qu", "ue ", " y ", " lo", "los", "de ", "cho",
    "an ", " co", "la ", "es ", "con", " la", " es", "ón ", "tra", "te ",
    "s d", "nos", "en ", " su", " se", "s p", "s c", "n s", "mos", "ión",
    "ho ", "est", "aci", "a l", "y l", "tod", "s y", "ra ", "otr", "on ",
    "nte", "na ", "n e", "ien", "ere", "ent", "ech", "e l", "dos", "do ",
    "a m", " to", " pe", " na", " ma", " ha", " en", " cu", " a ", "ás ",
    "tie", "tad", "son", "s e", "rta", "rec", "per", "ona", "odo", "o l",
    "o d", "o a", "n l", "n d", "más", "mpo", "lib", "ier", "e q", "e e",
    "der", "cua", "ció", "as ", " ti", " so", " ot", " no", " li", " di",
    "ían", "ía ", "vid", "us ", "uie", "uel", "ual", "tar", "sus", "su ",
    "sta", "se ", "s q", "s l", "rso", "ros", "res", "re ", "ran", "qui",
    "por", "o q", "nci", "nac", "men", "les", "ida", "hos", "esc", "ers",
    "er ", "emo", "e t", "e n", "dic", "des", "dem", "da ", "com", "cla",
    "cio", "cia", "bía", "bre", "ant", "amo", "al ", "ado", "ade", "ad ",
    "aba", "a v", "a s", "a e", "a d", "a c", " te", " po", " o ", " le",
    " al", "ños", "ñan", "ío ", "uer", "uch", "tro", "to ", "ter", "ta ",
    "str", "sin", "ser", "sam", "s s", "s n", "s m", "s h", "s a", "río",
    "rem", "raz", "r o", "po ", "pid", "pen", "pas", "ort", "omp", "o y",
    "o s", "o h", "nto", "nta", "nsa", "no ", "ne ", "ndo", "ndi", "nal",
    "nad", "muc", "mañ", "mae", "mad", "lqu", "lo ", "lle", "leg", "le ",
    "las", "ja ", "ió ", "ist", "ion", "in ", "iem", "idu", "ido", "idi",
    "ici", "ich", "ica", "ibr", "ibe", "ia ", "hac", "hab", "gar", "ert",
    "ern", "era", "ens", "ene", "enc", "emá", "emp", "ell", "ega", "eco",
    "e v", "e r", "e m", "e f", "e d", "dre", "deb", "dad", "d y", "cue",
    "ca ", "ber", "ban", "aña", "asa", "ana", "alq", "aes", "ada", "abí",
    "a t", " vi", " ve", " va", " ta", " si", " re", " ra", " pa", " ni",
    " má", " mu", " ll", " fr", " el", " ec", "ómi", "ó y", "ó q", "íti",
    "índ", "ías", "én ", "ápi", "án ", "á s", "zón", "zo ", "za ", "ya ",
    "y s", "y n", "y e", "y d", "y c", "y a", "xo ", "vit", "vie", "vez",
    "ver", "van", "vac", "uri", "ura", "upi", "uo ", "unt", "uno", "una",
];

pub const ITA: &[&str] = &[
    " di", "di ", "no ", "la ", "ni ", " e ", "ne ", "e d", " al", "ti ",
    "re ", "i a", "to ", "te ", "o d", "ion", "ano", " in", " ch", "za ",
    "ro ", "one", "lla", "li ", "i s", "i e", "che", " se", "le ", "he ",
    "e a", "chi", "a s", " pe", " li", "van", "tti", "rit", "ri ", "per",
    "oro", "o l", "o c", "o a", "nte", "lor", "in ", "i i", "i d", "gli",
    "eva", "ess", "ell", "e n", "e l", " so", " qu", " ma", " le", " la",
    " i ", " gl", "à e", "zio", "ver", "tra", "ta ", "son", "so ", "rso",
    "ono", "o s", "o i", "nza", "ndi", "na ", "ltr", "lib", "iri", "i r",
    "i n", "ha ", "gni", "gio", "ers", "ent", "e p", "alt", "a p", "a m",
    "a d", " o ", " no", " ne", " lo", " ha", " de", " co", "zza", "vit",
    "vid", "vev", "va ", "utt", "uo ", "tà ", "tut", "tto", "tte", "str",
    "ser", "sen", "rri", "riv", "ran", "ra ", "qua", "ona", "on ", "ogn",
    "o g", "mpo", "mo ", "ivi", "itt", "ita", "ind", "idu", "ibe", "iam",
    "i p", "i l", "i c", "hia", "gua", "ett", "est", "ere", "enz", "emp",
    "e v", "duo", "do ", "div", "dir", "con", "ber", "ati", "arr", "ann",
    "amo", "all", "agi", "a v", "a l", "a c", " ve", " tu", " te", " sc",
    " ra", " po", " na", " fr", " es", " do", " av", " ar", "uol", "uel",
    "ual", "tù ", "tta", "tro", "tri", "tin", "ten", "tem", "tat", "tan",
    "ssi", "sse", "si ", "sci", "san", "rtà", "rni", "raz", "rag", "que",
    "pri", "pre", "po ", "più", "pas", "ott", "olt", "oi ", "o p", "o f",
    "non", "nno", "nni", "ner", "nas", "n s", "n d", "mol", "man", "mae",
    "iù ", "iva", "itù", "ire", "ini", "ina", "igi", "ien", "iat", "ia ",
    "i v", "i u", "i o", "i h", "i g", "hi ", "fre", "ezz", "ert", "eri",
    "er ", "enu", "ene", "ed ", "e t", "e i", "e g", "e e", "e c", "del",
    "d o", "cos", "cia", "cch", "azi", "ave", "att", "ate", "ass", "asc",
    "are", "ard", "anz", "ant", "ani", "ale", "alc", "aes", "a o", "a e",
    " vi", " va", " st", " sp", " si", " ri", " pr", " pi", " pa", " or",
    " og", " mo", " gi", " fa", " ed", " ba", "ù t", "ù o", "ù i", "é l",
    "è n", "à s", "ze ", "vve", "vuo", "vra", "von", "vo ", "vic", "vec",
    "vat", "var", "vac", "uto", "uti", "ure", "ura", "uov", "uon", "unn",
];

pub const POR: &[&str] = &[
    "os ", " de", "de ", "em ", "as ", "que", " se", " qu", " e ", "ão ",
    "ra ", "ue ", "e a", " ou", " os", "ito", "am ", "to ", "s p", "s e",
    "ade", " na", " di", " co", "s o", "ou ", "nos", "m d", "ess", "e d",
    "do ", "com", " pe", " es", " em", "utr", "tra", "te ", "ser", "sem",
    "s d", "s c", "res", "out", "om ", "nte", "man", "m s", "es ", "ent",
    "e o", "dos", "dad", "ara", "a p", " pa", " ma", " li", " a ", "sso",
    "ssa", "s s", "o q", "o e", "o d", "is ", "eit", "e e", "da ", "ar ",
    "ado", "ada", "a m", "a c", " te", " pr", " po", " ca", " as", "ção",
    "ura", "uma", "tos", "tod", "tin", "tem", "tad", "sor", "sam", "sa ",
    "s n", "ros", "rei", "qua", "pro", "pre", "por", "par", "ora", "odo",
    "o t", "nha", "nas", "mpo", "m o", "m e", "ire", "inh", "ida", "ia ",
    "ha ", "gar", "esc", "er ", "emp", "ela", "e s", "e r", "e p", "e n",
    "dir", "dev", "car", "ava", "ant", "ano", "ama", "al ", "ais", "a o",
    "a e", " à ", " to", " so", " o ", " do", "ça ", "vão", "voc", "vid",
    "vam", "uit", "uas", "tro", "ter", "sse", "soa", "sen", "scr", "sci",
    "sad", "s l", "s h", "s a", "rof", "rio", "ria", "re ", "rda", "raç",
    "ras", "ran", "r o", "po ", "pes", "per", "pen", "pas", "ort", "or ",
    "ofe", "o o", "nça", "não", "nta", "nsa", "nid", "nhã", "ngu", "na ",
    "mui", "mos", "men", "mai", "m q", "m a", "liv", "lib", "lha", "las",
    "la ", "ião", "ivr", "iu ", "io ", "ica", "ibe", "ias", "iam", "hã ",
    "hum", "heg", "gua", "fes", "eve", "est", "ern", "ere", "erd", "ens",
    "ega", "e t", "e l", "e f", "e c", "des", "dep", "cla", "cia", "che",
    "ber", "ba ", "açã", "ass", "asc", "asa", "anç", "anh", "amo", "aba",
    "a v", "a s", " vã", " vo", " ve", " ti", " re", " ra", " nã", " no",
    " mu", " in", " hu", " fr", " el", " ch", " am", " al", "ós ", "íti",
    "íri", "íng", "ídu", "ênc", "ê e", "éri", "ém ", "ças", "ãe ", "ã v",
    "ã f", "á n", "á m", "á e", "à v", "à s", "à l", "zão", "zia", "zan",
    "xo ", "víd", "vro", "vre", "von", "via", "vez", "ves", "vem", "vel",
    "vat", "vag", "uém", "us ", "uo ", "uns", "uno", "una", "uer", "uem",
    "uel", "uda", "uaç", "uan", "ual", "uai", "ua ", "u s", "u q", "u p",
];

pub const NLD: &[&str] = &[
    "en ", " de", "der", " en", "de ", "nde", "er ", "an ", " ge", "n d",
    "den", " me", "ten", "sch", "n g", "gen", "cht", "and", "aar", "aan",
    " he", " da", "ze ", "te ", "ren", "n w", "in ", "et ", "e o", "at ",
    " we", " in", "ver", "rij", "men", "ij ", "ie ", "id ", "hte", "hei",
    "ers", "ere", "ens", "eid", "ede", " ze", " va", " op", " aa", "wor",
    "van", "un ", "r h", "r d", "oud", "ord", "ond", "of ", "nd ", "n z",
    "n v", "n o", "n i", "n e", "n b", "ke ", "ijk", "hun", "e s", "e h",
    "e d", "e a", "dat", "d e", "al ", " zo", " zi", " wo", " vr", " ve",
    " te", " of", " hu", " be", " an", "zij", "we ", "vri", "ude", "t z",
    "sta", "st ", "sla", "sen", "rec", "re ", "rde", "op ", "oor", "nse",
    "nie", "n s", "n m", "n l", "n h", "lle", "lij", "le ", "ken", "ing",
    "ind", "ijn", "het", "f a", "erk", "end", "elk", "eli", "eer", "een",
    "ech", "e m", "e j", "die", "ard", "ar ", " wa", " sc", " re", " ni",
    " na", " mo", " la", " je", " ha", " ee", " al", "zon", "wie", "ven",
    "uf ", "tij", "tie", "t w", "t v", "t m", "t d", "s e", "s b", "rsc",
    "roe", "rd ", "r t", "r i", "pen", "p t", "ore", "orb", "oon", "omd",
    "om ", "oed", "och", "nge", "ng ", "naa", "n t", "met", "mee", "maa",
    "ls ", "lke", "lan", "lac", "laa", "l b", "kom", "kin", "kan", "k m",
    "juf", "jn ", "jke", "jk ", "jhe", "je ", "jd ", "j e", "is ", "ik ",
    "ijh", "ijd", "igh", "ift", "iet", "ied", "ht ", "hri", "hou", "hor",
    "hen", "hee", "hap", "had", "ghe", "ges", "ged", "geb", "gd ", "g o",
    "ft ", "eze", "est", "enk", "el ", "eke", "eho", "eft", "ees", "eef",
    "ebo", "e w", "e v", "e r", "e l", "e k", "dag", "daa", "d z", "d w",
    "d v", "d g", "d d", "chr", "che", "cha", "boo", "bij", "bel", "as ",
    "ang", "all", "age", "ach", "aat", " za", " wi", " ti", " ta", " sl",
    " on", " om", " ma", " le", " ko", " ki", " ju", " ik", " ie", " ho",
    " er", " el", " di", " bo", "zul", "zou", "zoa", "zic", "zen", "zeg",
    "zat", "zal", "zaa", "wij", "wet", "wer", "wel", "wee", "wat", "was",
    "wam", "waa", "vro", "voo", "vie", "vee", "vak", "us ", "ur ", "ull",
    "uit", "uig", "ud ", "u w", "tus", "tui", "tsc", "ts ", "toe", "tio",
];

pub const EPO: &[&str] = &[
    "aj ", " la", "as ", "la ", "kaj", " ka", "oj ", "is ", "li ", "ili",
    " il", " al", "on ", "jn ", "ia ", "aŭ ", " ra", " de", "n k", "j l",
    "eco", " se", " ma", " ki", "tas", "raj", "no ", "ni ", "mal", "lia",
    "ke ", "io ", "est", "en ", "de ", "co ", "a a", " ĉi", " ni", " li",
    " ke", " es", "ĉiu", "sta", "roj", "ro ", "o a", "lib", "j p", "j k",
    "j e", "iu ", "ion", "iaj", "i p", "ali", "ajt", " ti", " si", " ri",
    " po", " pl", " ne", " ko", " ja", " aŭ", "un ", "toj", "tis", "sti",
    "so ", "sia", "sed", "s l", "ris", "rec", "pos", "ojn", "o k", "o d",
    "ler", "kla", "jto", "j r", "iuj", "iri", "ino", "ide", "ibe", "fer",
    "ere", "eni", "emp", "e i", "cia", "ber", "al ", "ajn", "aci", "a t",
    "a i", " vi", " te", " pe", " pa", " le", " in", " en", " di", " am",
    "ŭ s", "ŭ a", "ĉar", "vo ", "vir", "ven", "va ", "und", "uj ", "uis",
    "tru", "tiu", "tio", "tin", "ten", "tem", "tec", "taj", "stu", "str",
    "sen", "sek", "sci", "sas", "s t", "s s", "s r", "s p", "s k", "s d",
    "s a", "rui", "ri ", "ras", "rap", "rac", "po ", "pli", "ple", "pid",
    "pas", "ose", "os ", "ona", "omo", "o e", "nst", "nio", "nen", "ne ",
    "ndo", "nas", "nan", "na ", "n s", "n n", "n l", "n i", "n d", "mpo",
    "moj", "mi ", "mas", "lin", "laŭ", "l l", "kon", "kol", "kiu", "kio",
    "je ", "jar", "j s", "j j", "iĝo", "iun", "ist", "iro", "ins", "in ",
    "iga", "i t", "i n", "i a", "hun", "hom", "hav", "far", "eti", "ero",
    "ern", "eri", "eno", "enc", "ena", "el ", "eda", "e v", "e s", "e m",
    "e l", "e k", "dis", "dev", "das", "d l", "cio", "ava", "ate", "ata",
    "ask", "aro", "ari", "ar ", "api", "ami", "ama", "am ", "alv", "alf",
    "a s", "a r", "a p", "a o", "a j", "a e", " ĉa", " ta", " st", " sk",
    " pr", " na", " mi", " je", " hu", " ho", " ha", " fa", "ŭ r", "ŭ n",
    "ŭ d", "ŝi ", "ŝat", "ĵoj", "ĝos", "ĝo ", "ĝin", "ĉi ", "ĉe ", "zem",
    "vut", "vus", "vos", "viv", "ver", "vec", "vas", "var", "uu ", "uti",
    "ute", "uso", "us ", "ure", "unu", "um ", "ult", "ujn", "uda", "ud ",
    "u t", "u s", "u r", "u p", "u m", "u h", "u e", "u d", "u a", "tus",
    "tud", "tu ", "tri", "tre", "ton", "to ", "tik", "ti ", "te ", "tat",
];

pub const POL: &[&str] = &[
    " po", " i ", "ie ", "nie", " ni", " na", "wie", "dzi", "ch ", "ły ",
    "zie", "odz", "ni ", "li ", "iek", "ci ", " pr", " cz", "ła ", "ych",
    "wol", "owi", "kie", "ka ", "iel", "em ", "ek ", "ej ", "ego", "ści",
    "szy", "sta", "rod", "pra", "pow", "ośc", "oln", "my ", "kol", "ię ",
    "inn", "ia ", "i s", "i i", "go ", "eni", "e m", "czy", "a s", "a n",
    " za", " wo", " sw", " sp", " si", " ma", "że ", "ędz", "ą s", "óry",
    "zys", "zen", "zas", "yci", "y p", "wa ", "ucz", "się", "rze", "raw",
    "ost", "olw", "nyc", "noś", "nia", "na ", "mie", "lwi", "je ", "iem",
    "ied", "iec", "i p", "e n", "dy ", "czn", "cza", "as ", "a p", " że",
    " w ", " to", " sz", " ro", " lu", " kt", " in", "żni", "żdy", "łow",
    "ę z", "zły", "zło", "zą ", "zyt", "zyc", "zos", "zgl", "zek", "yśl",
    "yć ", "y z", "y c", "wzg", "wsz", "woj", "waż", "u s", "tór", "twa",
    "tob", "to ", "tal", "szł", "sze", "swo", "stw", "spo", "rzy", "ry ",
    "rac", "prz", "pos", "pod", "owo", "osi", "oli", "oje", "odc", "och",
    "obi", "o z", "o s", "o r", "o n", "o b", "nny", "nni", "nik", "nic",
    "neg", "nau", "myś", "ma ", "m i", "lęd", "lud", "lno", "lni", "lka",
    "le ", "któ", "ko ", "każ", "kac", "jsz", "ji ", "jak", "im ", "ien",
    "iej", "i w", "i u", "i r", "i d", "i c", "i b", "hod", "h p", "h i",
    "glę", "elk", "eli", "eko", "ejs", "edz", "ecz", "e z", "e r", "dzą",
    "dzo", "dze", "do ", "czł", "cji", "cie", "cho", "będ", "by ", "bez",
    "ażd", "ała", "awa", "auc", "ani", "amy", "ali", "aki", "ają", "acj",
    "a l", "a i", "a b", " z ", " wz", " ws", " wi", " wa", " te", " st",
    " ró", " ra", " my", " mo", " mi", " ko", " ka", " ju", " ja", " do",
    " co", " bę", " by", " be", " a ", "żyć", "żym", "życ", "żko", "żki",
    "żeb", "ż w", "ż c", "źni", "źmi", "śmi", "ślę", "śli", "ńst", "ło ",
    "łec", "łci", "ław", "ężk", "ęła", "ęzy", "ęsk", "ępo", "ędu", "ęde",
    "ęce", "ę w", "ć w", "ć c", "ąży", "ążk", "ątk", "ądó", "ą o", "ą i",
    "óżn", "óźn", "ówn", "ów ", "zła", "zył", "zyk", "zyi", "zyb", "zwy",
    "zum", "zpi", "zon", "zo ", "zny", "zno", "zni", "zne", "zna", "zko",
    "zim", "zia", "zeń", "zes", "zej", "zeg", "zdą", "zał", "zaw", "zau",
];

pub const TUR: &[&str] = &[
    "lar", " ve", "er ", "ve ", "ler", "rın", "arı", "an ", "ını", "nı ",
    "bir", " ya", "yet", "nda", "iye", "ama", " ha", " bi", "nla", "la ",
    "kla", "ir ", "in ", "her", "eya", "et ", "diğ", "ard", "ar ", "a g",
    " ço", " he", " di", "ınd", "çok", "ya ", "vey", "tme", "rle", "rla",
    "ra ", "n i", "ins", "etm", "en ", "e h", "de ", "dan", "ala", " se",
    " ka", " ge", "ğre", "ğer", "öğr", "yor", "ula", "ti ", "siy", "san",
    "rk ", "rin", "rdı", "r h", "r b", "oğu", "onl", "oku", "ok ", "nsa",
    "ni ", "nel", "n s", "n o", "men", "mal", "lik", "kul", "kar", "iğe",
    "iz ", "irl", "hür", "hak", "ha ", "geç", "eti", "eri", "edi", "ede",
    "e k", "dah", "da ", "ava", "ara", "aha", "a d", "a b", " öğ", " so",
    " on", " ok", " ki", " in", " hü", " gü", " fa", " da", "şün", "ş y",
    "ır ", "ımı", "ıkl", "ı v", "ğın", "ğim", "üşü", "üyo", "ürü", "ürr",
    "ünü", "ün ", "ç k", "zla", "zam", "yav", "yan", "vaş", "uş ", "und",
    "tı ", "tur", "til", "t v", "son", "sen", "rşı", "rri", "riy", "rha",
    "ret", "ren", "rdi", "rde", "r v", "r f", "orl", "okt", "niy", "ngi",
    "na ", "n d", "mse", "miz", "mil", "med", "man", "lun", "lli", "li ",
    "le ", "ktı", "ktu", "ki ", "iği", "ist", "ini", "imi", "ile", "il ",
    "ik ", "ide", "i v", "i o", "i h", "i e", "i d", "hiç", "han", "gün",
    "gi ", "far", "erh", "erd", "eni", "eli", "ele", "e e", "dı ", "düş",
    "doğ", "din", "di ", "den", "bak", "aş ", "arş", "arl", "ark", "anı",
    "ann", "anl", "ang", "alı", "akı", "akt", "akl", "aki", "aca", "a k",
    " za", " sa", " ol", " ne", " is", " il", " hi", " et", " em", " dü",
    " do", " ba", " al", " ak", "şıl", "şı ", "şti", "şli", "şit", "şi ",
    "şey", "şe ", "şbu", "şan", "şam", "ş v", "ışa", "ığı", "ızl", "ıza",
    "ız ", "ırk", "ıra", "ına", "ın ", "ılı", "ıll", "ıl ", "ıdı", "ı y",
    "ı s", "ı o", "ı k", "ı i", "ı d", "ı a", "ğuş", "ğum", "ğuk", "ğin",
    "ğar", "üz ", "ütü", "ür ", "ünl", "ünk", "üms", "ülü", "ü ö", "özl",
    "öze", "öyl", "öne", "öle", "çün", "çti", "çoğ", "çoc", "çma", "çir",
    "çer", "çbi", "çal", "zma", "zle", "zin", "zih", "zet", "zac", "z z",
    "z y", "z o", "z i", "z f", "yıl", "yür", "ysi", "yok", "yle", "yaş",
];

pub const SWE: &[&str] = &[
    " de", "en ", "och", "ch ", " oc", "er ", "de ", "ar ", "om ", " ti",
    "na ", "ing", "et ", " vi", " i ", "tt ", "ill", "den", "att", "an ",
    " va", " ha", "var", "til", "som", "r o", "ng ", "lle", "ker", "gen",
    "ell", "ad ", " sk", " fö", " el", "ätt", "är ", "vi ", "tig", "t o",
    "rät", "r s", "r d", "n a", "ll ", "ler", "la ", "id ", "het", "för",
    "as ", "and", " ut", " so", " sa", " me", " fr", " at", " an", "å d",
    "tti", "ter", "te ", "t v", "sko", "ska", "sin", "s i", "rt ", "ren",
    "r h", "på ", "or ", "on ", "nna", "nen", "n v", "lt ", "lla", "isk",
    "ina", "ig ", "i s", "h s", "h l", "gar", "g s", "fri", "ete", "ers",
    "ent", "det", "der", "cke", "av ", "arn", "are", "all", "ag ", "ade",
    "a s", "a f", " är", " sl", " si", " rä", " på", " mä", " lä", " in",
    " en", " bö", " ba", " av", "ör ", "öck", "år ", "ång", "ära", "änn",
    "änk", "vid", "vet", "ver", "uta", "tta", "tid", "tan", "t u", "t t",
    "t d", "t b", "spr", "sla", "skr", "sam", "s m", "rso", "rne", "rna",
    "riv", "rin", "ri ", "rgo", "rg ", "ras", "rar", "ra ", "r v", "r u",
    "r t", "r f", "r a", "ot ", "ort", "org", "one", "ode", "nte", "nni",
    "nis", "nin", "nge", "nga", "ndr", "nar", "nad", "n t", "n g", "n f",
    "n d", "n b", "män", "mor", "mma", "med", "ma ", "lär", "llt", "lln",
    "lig", "las", "kri", "kor", "kom", "kar", "ka ", "ion", "inn", "igh",
    "iga", "ick", "i m", "i e", "har", "had", "h r", "h e", "h b", "gt ",
    "gon", "ghe", "em ", "eda", "ed ", "e o", "e i", "e h", "e f", "dra",
    "dom", "dig", "dem", "dan", "dag", "da ", "d t", "d f", "d d", "ck ",
    "bör", "böc", "bli", "bar", "ann", "a o", "a m", "a i", "a h", "a g",
    "a b", "a a", " tr", " se", " re", " mo", " lo", " li", " ko", " hå",
    " fi", " di", " da", " bl", " be", " ar", " al", "övr", "örs", "örn",
    "örk", "örd", "öpp", "öna", "ön ", "ödd", "åts", "åso", "årt", "åre",
    "åll", "åk ", "ågo", "äst", "ärk", "ärg", "ärd", "än ", "äls", "äll",
    "äld", "äke", "yck", "vär", "vri", "vin", "vik", "vbö", "vad", "va ",
    "v o", "v n", "v b", "utt", "utr", "ut ", "ust", "urs", "upp", "ung",
    "und", "ull", "uft", "udf", "tän", "täl", "ttn", "tsk", "ts ", "trä",
];

// Cyrillic
pub const RUS: &[&str] = &[
    " на", " и ", " по", "то ", "ми ", "ли ", " пр", "ни ", "ени", "го ",
    " в ", "ого", "ног", "ет ", "ть ", "льн", "и и", " ра", " ка", "сво",
    "про", "ост", "но ", "на ", "и н", "и д", "и в", "ать", " то", " со",
    " св", " ни", " не", " до", "что", "т н", "ств", "рав", "пол", "ото",
    "они", "ом ", "олж", "ове", "нь ", "ла ", "или", "ии ", "и с", "и п",
    "енн", "е и", "дол", "все", " чт", " он", " ко", " ил", " де", " вс",
    " бы", "ьно", "ыми", "ый ", "шен", "чит", "чен", "том", "тно", "тве",
    "ся ", "сто", "сем", "рем", "при", "пра", "одн", "обо", "о т", "о п",
    "о о", "о н", "о в", "ным", "ны ", "нно", "ник", "нии", "нас", "лов",
    "каж", "ия ", "их ", "им ", "и р", "жен", "жды", "ень", "дый", "дет",
    "ден", "дел", "вре", "воб", "бод", "ами", "аль", "ажд", "а п", "а о",
    "а н", " уч", " те", " от", " лю", " им", " ду", " вр", "ят ", "ься",
    "ьни", "ь в", "ых ", "ыло", "ы п", "шли", "чел", "ца ", "ход", "х и",
    "ую ", "учи", "уча", "ума", "уде", "тьс", "тро", "тра", "тоя", "тор",
    "тел", "теб", "тал", "т б", "сть", "ста", "сос", "сно", "руг", "ров",
    "ро ", "рел", "раз", "рад", "раб", "пот", "пос", "оше", "оче", "отн",
    "оль", "олу", "оло", "ожд", "одя", "ово", "о у", "о р", "о и", "о б",
    "нош", "нов", "ния", "ниц", "них", "не ", "мно", "мен", "маю", "м с",
    "люд", "ло ", "лич", "лжн", "лже", "лен", "кто", "кот", "ког", "ки ",
    "как", "й ч", "й д", "иче", "ица", "ите", "иги", "и у", "жны", "жде",
    "ест", "ен ", "еми", "еме", "ем ", "ель", "ело", "ели", "ела", "ек ",
    "ей ", "ебе", "е д", "е в", "дят", "дум", "ду ", "дру", "ди ", "во ",
    "вет", "вен", "век", "ве ", "ва ", "в с", "в о", "был", "буд", "бе ",
    "ают", "аю ", "аци", "ас ", "али", "ает", "ава", "а с", " че", " у ",
    " ск", " ре", " оч", " об", " о ", " мн", " ин", " за", " др", " бу",
    "яще", "яни", "язы", "я с", "я о", "я к", "я в", "ютс", "ют ", "юдь",
    "юди", "юби", "ю ш", "ю п", "ю о", "ю н", "ю и", "ью ", "ьше", "ьны",
    "ьми", "ь х", "ь т", "ь с", "ь о", "ычн", "ыть", "ыст", "ыка", "ые ",
    "ыва", "ыбн", "ы у", "ы т", "ы с", "ы р", "щес", "щей", "шко", "ше ",
    "чну", "чно", "чия", "чес", "чег", "чаю", "чае", "цио", "цие", "циа",
];

pub const UKR: &[&str] = &[
    "ого", " на", "на ", "го ", " і ", " по", " пр", "ні ", "ти ", "о в",
    "ли ", "ови", "льн", " не", " за", "ьно", "то ", "ся ", "ста", "про",
    "пов", "но ", "ми ", "их ", "и п", "ати", "а п", " ст", " ма", " лю",
    " ду", "іль", "сі ", "сво", "пра", "они", "оди", "о з", "нов", "нні",
    "ни ", "люд", "дно", "вон", "вин", "бо ", " що", " св", " ко", " ві",
    " вс", " во", " в ", "інш", "ідн", "ють", "юди", "що ", "чит", "час",
    "хто", "ть ", "тан", "рав", "одн", "ово", "обо", "ног", "них", "має",
    "кол", "ки ", "ити", "инн", "ина", "и і", "и с", "и н", "и в", "за ",
    "же ", "дин", "віл", "від", "всі", "ає ", "ас ", "аль", "або", "а н",
    "а м", " ін", " як", " ча", " то", " те", " ро", " ра", " ні", " аб",
    " а ", "ією", "ічо", "іти", "іст", "ід ", "і у", "і с", "і р", "і п",
    "і н", "і д", "і в", "єю ", "є н", "яки", "я д", "ю і", "ька", "шог",
    "шли", "шен", "чог", "ціє", "ума", "уже", "у с", "ті ", "тис", "тел",
    "теб", "та ", "ств", "род", "ро ", "рац", "під", "пер", "ої ", "оше",
    "она", "оло", "оли", "ожн", "оду", "одж", "ові", "оби", "о і", "о т",
    "о с", "о п", "о н", "ніч", "ня ", "ним", "не ", "мо ", "мат", "льк",
    "лив", "лас", "ла ", "кож", "кан", "ка ", "йшл", "ите", "ися", "имо",
    "ими", "ила", "и у", "и з", "зал", "жна", "ере", "ені", "енн", "ель",
    "ебе", "е с", "е п", "е н", "діл", "дум", "дуж", "ду ", "до ", "ди ",
    "гат", "вчи", "вої", "вог", "воб", "ват", "ва ", "біл", "бод", "бе ",
    "баг", "ают", "аці", "ато", "ася", "аро", "ані", "ано", "але", "ага",
    "ава", "а с", "а л", "а в", " шк", " чи", " хт", " у ", " та", " со",
    " рі", " пі", " пе", " од", " ни", " ми", " з ", " ді", " до", " вч",
    " бі", " бу", " ба", "їм ", "їй ", "ї ш", "ї к", "ії ", "іят", "ішо",
    "ічк", "іхт", "іхн", "ітн", "іри", "іон", "ім ", "іля", "іли", "іле",
    "іку", "ізн", "ідк", "ігі", "івн", "іал", "і щ", "і ч", "і ц", "і т",
    "і о", "і м", "і л", "і з", "і б", "і а", "є п", "яти", "як ", "я р",
    "я н", "я в", "ює ", "юдь", "юва", "юби", "ю п", "ю з", "ю д", "ьше",
    "ься", "ьор", "ьни", "ьми", "ь ш", "ь н", "щод", "ща ", "ші ", "шкі",
    "шко", "ших", "шит", "ше ", "шви", "чні", "чни", "чки", "чи ", "чай",
];

pub const BUL: &[&str] = &[
    " пр", " и ", "на ", " по", " на", "то ", "ите", "да ", "те ", "та ",
    "но ", "и с", "и д", "е с", "во ", " да", "рав", "ли ", "или", "и п",
    "ени", "ва ", "ата", "ат ", " ра", " от", "пра", "ове", "о и", "ни ",
    "ки ", "и в", "а с", " си", " се", " ко", " им", " вс", "ят ", "че ",
    "ха ", "тво", "си ", "се ", "сво", "о п", "нов", "ен ", "ден", "го ",
    "а п", "а н", "а и", " уч", " св", " мн", " ми", " ил", " за", " в ",
    " бе", "яха", "ще ", "учи", "тел", "ств", "сек", "са ", "руг", "при",
    "пол", "от ", "ого", "обо", "о о", "о д", "ног", "ние", "мно", "ме ",
    "ма ", "кат", "как", "ия ", "има", "им ", "ие ", "ива", "и ч", "и и",
    "еки", "ез ", "е у", "е к", "е и", "дру", "ги ", "все", "воб", "ват",
    "бод", "ава", "а в", "а б", " че", " те", " ни", " ка", " др", " де",
    "ърд", "ше ", "чов", "чки", "чит", "ция", "хор", "утр", "таз", "т п",
    "т н", "сър", "ст ", "сля", "сле", "сич", "рин", "рем", "рек", "рат",
    "раз", "рад", "про", "пре", "пом", "по ", "ото", "отн", "оти", "ост",
    "ора", "оли", "оит", "оди", "оби", "о у", "о с", "о н", "о м", "нит",
    "ник", "не ", "нас", "мис", "мат", "м с", "лка", "лич", "лен", "лед",
    "кой", "к и", "ичк", "исл", "иги", "иал", "и р", "и л", "зна", "зи ",
    "еше", "ече", "ето", "ено", "еме", "елк", "ека", "ек ", "е м", "е д",
    "дни", "ди ", "въз", "вси", "вре", "веч", "век", "бив", "беш", "без",
    "аци", "аме", "але", "акъ", "акв", "ази", "аво", "авн", "а о", "а з",
    "а д", "а г", " ще", " чо", " хо", " ус", " та", " съ", " ст", " сл",
    " са", " с ", " ро", " ре", " об", " не", " ма", " ли", " ги", " въ",
    " вр", " ва", " бъ", " би", " а ", "ята", "яма", "ява", "ябв", "я з",
    "ъсн", "ърз", "ърж", "ърв", "ъм ", "ъзн", "ъзг", "ъде", "ъвт", "ъве",
    "щот", "що ", "шат", "ш и", "чна", "чия", "чин", "чил", "чет", "чес",
    "чен", "чам", "цио", "циа", "ци ", "цвя", "цат", "ход", "хна", "х н",
    "уче", "ух ", "усъ", "усм", "урн", "ум ", "ужб", "уди", "уде", "уго",
    "уги", "уг ", "у с", "тях", "туд", "тст", "тря", "три", "тре", "тра",
    "той", "тно", "тна", "тич", "тиг", "тив", "ти ", "тет", "тер", "теб",
    "тар", "т т", "т с", "т к", "т и", "т в", "т б", "сят", "съв", "сут",
];

// Devanagari
pub const HIN: &[&str] = &[
    "ें ", "और ", " और", " है", "से ", "में", " मे", " प्", " कि", " उन",
    "प्र", "की ", " से", " जा", "्या", "ों ", "े ह", "ा क", "है ", "या ",
    "ता ", "के ", "े प", "े क", "ुत ", "िका", "ार ", "हुत", "रे ", "बहु",
    "ने ", "ति ", "कार", "का ", " सम", " या", " बह", " को", " अध", "्रत",
    "्ति", "ैं ", "े म", "े ब", "ि क", "हैं", "ले ", "र स", "याद", "भी ",
    "न्ह", "ते ", "जात", "को ", "कि ", "उन्", "ं स", "ं ज", "ं क", " स्",
    " दे", " के", " की", " का", " कर", "्हे", "्रा", "्त ", "े स", "ी ब",
    "ी अ", "िया", "िन ", "ाव ", "ारे", "ाप्", "ादा", "ा औ", "हें", "स्व",
    "राप", "र क", "यों", "यक्", "बच्", "प्त", "न्य", "न्त", "धिक", "दा ",
    "जाए", "च्च", "चे ", "चार", "गा ", "क्त", "अन्", "अधि", "ं औ", " हम",
    " वि", " मा", " भा", " बच", " न ", " अन", "्वत", "्यो", "्ये", "्यक",
    "्य ", "्म ", "्त्", "्ण ", "्चे", "ो ज", "ै औ", "ेक ", "े न", "े ध",
    "े थ", "े उ", "ुरा", "ुछ ", "ीरे", "ीं ", "ी ह", "ी म", "ी न", "ी द",
    "ी क", "िसी", "िर ", "िता", "िचा", "ि य", "ि अ", "ास ", "ारो", "ामल",
    "ापि", "ाद ", "ाते", "ाएग", "ाँ ", "ा ह", "ा स", "ा म", "ा ज", "ा उ",
    "ा अ", "़्य", "़ ह", "हे ", "हीं", "ही ", "हा ", "हम ", "स्क", "सी ",
    "समा", "समय", "सभी", "षा ", "व्य", "वे ", "विच", "वतन", "व क", "लोग",
    "ल क", "र्ण", "रों", "राज", "रहे", "रत्", "रता", "र ब", "र प", "र न",
    "र उ", "र अ", "येक", "याप", "माम", "मले", "मय ", "भाव", "फिर", "पिक",
    "पास", "पर ", "पनी", "न्म", "नी ", "नही", "नसे", "नता", "न क", "ध्य",
    "धीर", "दी ", "थे ", "त्र", "त्य", "तन्", "त ह", "त स", "ज़्", "जन्",
    "खा ", "कुछ", "किस", "किय", "कहा", "कल ", "करन", "क व", "एगा", "उनस",
    "उनक", "इस ", "अपन", "अध्", "ं प", " हो", " ही", " सु", " सा", " सभ",
    " व्", " वे", " लो", " लि", " रह", " मु", " भी", " बा", " फि", " पा",
    " पह", " पर", " ने", " नह", " धी", " थे", " ज़", " जन", " कु", " कह",
    " उस", " इस", " अप", "्हो", "्षा", "्वा", "्वप", "्रण", "्रक", "्यव",
    "्मा", "्मज", "्पर", "्पत", "्नि", "्धि", "्दी", "्ता", "्तर", "्टि",
    "्चो", "्कू", "्कु", "ौरव", "ोषण", "ोले", "ोचत", "ोगो", "ोगा", "ोग ",
    "ोई ", "ोंन", "ोंक", "ो ब", "ो प", "ो ग", "ो क", "ो इ", "ॉपि", "ैयक",
    "ैठक", "ेष ", "ेश ", "ेर ", "ेन ", "ेदभ", "ेखा", "ेकि", "े भ", "े फ",
];

pub const MAR: &[&str] = &[
    "्या", "त्य", "या ", " त्", "ले ", "यां", "ाही", "ांन", "ा व", "च्य",
    "ही ", "ला ", "णि ", "आणि", " व ", " जा", " आण", "े क", "े आ", "ार ",
    "ा ज", "ल्य", "प्र", "ना ", "ते ", "ती ", "आहे", "ंना", " आह", "्वा",
    "्ती", "िंव", "ात ", "ांच", "ा स", "होत", "वा ", "व स", "चा ", "क्त",
    "किं", "कार", "ंवा", "ंच्", " हो", " प्", " कि", " का", " कर", " आप",
    "्व ", "्रत", "्ये", "्यक", "ोती", "ेले", "े त", "ीत ", "िका", "ान ",
    "ाचा", "ा आ", "हे ", "स्व", "सर्", "व्य", "वाच", "लेल", "र्व", "र आ",
    "याब", "याच", "यक्", "य क", "मुल", "मान", "पल्", "नी ", "नाह", "धिक",
    "त्र", "तील", "तंत", "त व", "डे ", "केल", "की ", "कडे", "अधि", "ंनी",
    "ंत्", " स्", " सा", " सर", " व्", " रा", " मु", " बा", " ना", " ते",
    " तु", " के", " अध", "्हा", "्र्", "्म ", "ेत ", "ेका", "ेक ", "े ह",
    "े व", "े प", "े ज", "ूप ", "ून ", "ू न", "ुले", "ुला", "ुन्", "ीला",
    "ीय ", "ीच ", "ी स", "ी व", "ी म", "ी ब", "ी ख", "ी आ", "ितल", "िचा",
    "िक ", "ि म", "ास्", "ावर", "ायल", "ामा", "ाता", "ातं", "ाकड", "ांग",
    "ा य", "ा द", "ा क", "ा उ", "ा इ", "हेत", "हा ", "हळू", "स्त", "सां",
    "समा", "षा ", "शी ", "वेळ", "विच", "वात", "वले", "वर्", "वर ", "व त",
    "ली ", "र्य", "रत्", "रतो", "रण ", "र न", "र क", "येक", "ये ", "याव",
    "यात", "याक", "यला", "म क", "भाव", "बाई", "पण ", "न्म", "ने ", "न प",
    "धी ", "दिव", "त्व", "त्त", "तो ", "तुझ", "तात", "ता ", "तले", "तर ",
    "त ह", "त क", "ण्य", "णाल", "जात", "जन्", "चार", "गित", "खूप", "क्ष",
    "कोण", "कां", "करत", "क व", "इतर", "आपल", "ंगि", " सु", " सम", " शा",
    " वे", " वि", " वा", " वर", " लि", " या", " मा", " भा", " पु", " दि",
    " जन", " खू", " को", " की", " इत", "्षे", "्षि", "्षा", "्वि", "्वत",
    "्रे", "्री", "्रण", "्र ", "्मत", "्धी", "्दल", "्था", "्त्", "्ता",
    "्तक", "्त ", "्ण ", "्ठा", "्ट्", "्टी", "्जा", "्क ", "ोहो", "ोबर",
    "ोते", "ोणा", "ोणत", "ोज ", "ोचल", "ो त", "ैकी", "ेव्", "ेवल", "ेळे",
    "ेळ ", "ेल्", "ेली", "ेला", "ेल ", "ेम ", "ेपे", "ेने", "ेदभ", "ेते",
    "ेचा", "ेक्", "ेकब", "ेकड", "े स", "े म", "े च", "ूहळ", "ूलस", "ूद ",
    "ुस्", "ुरक", "ुमच", "ुद्", "ुत्", "ुट्", "ुझी", "ुझा", "ील ", "ीरि",
    "ीरन", "ीर ", "ीजव", "ीची", "ी ह", "ी ल", "ी र", "ी भ", "ी प", "ी न",
];

pub const NEP: &[&str] = &[
    "हरू", "ाई ", "लाई", " र ", "्ति", "ार ", "रू ", "मा ", "ले ", "को ",
    "ीहर", "िका", "ने ", "क्त", " सम", " बि", "्रत", "्त्", "ेरै", "ेर ",
    "व्य", "वा ", "रै ", "यो ", "यक्", "न् ", "धेर", "ति ", " व्", " वि",
    " वा", " धे", " थि", " छ ", " गर", " के", "्वत", "्ये", "्यक", "्नु",
    "ैन ", "ेक ", "िचा", "िक ", "ामा", "ाउन", "ा क", "ा अ", "हुन", "स्व",
    "स्त", "समा", "सबै", "विच", "वतन", "र्न", "र र", "र म", "भने", "न्त",
    "नै ", "नीह", "नि ", "धिक", "त्व", "त्र", "त्य", "त्त", "तन्", "छैन",
    "चार", "गर्", "क्ष", "कार", "का ", "क व", "उनी", "अधि", " स्", " सब",
    " रा", " भा", " भन", " जा", " छै", " उन", " अन", " अध", "्षि", "्या",
    "्य ", "्म ", "्पत", "्दा", "्तो", "्छन", "्छ ", "्ग ", "ोले", "ो स",
    "ो ब", "ैला", "ेछ ", "ेका", "े म", "े न", "े छ", "ू प", "ुरा", "ुभय",
    "ुनै", "ुने", "िला", "िरह", "िने", "िद्", "िता", "िजह", "िक्", "िए ",
    "ाले", "ामी", "ान ", "ा र", "ा थ", "हेक", "हाम", "हत्", "सम्", "समय",
    "षिक", "शिक", "विद", "लेख", "रो ", "रूल", "रहे", "रत्", "रता", "र ह",
    "र स", "र व", "र क", "येक", "य व", "मील", "मान", "महत", "भाव", "भयो",
    "भन्", "बै ", "बित", "प्र", "पाई", "पनि", "पत्", "न्य", "न्म", "न्छ",
    "नो ", "नेछ", "नुभ", "नु ", "निज", "द्य", "दिन", "दा ", "थिए", "तो ",
    "तिल", "तिम", "तिक", "ता ", "त स", "जिक", "जात", "जहर", "जन्", "छु ",
    "छन्", "छ र", "ङ्ग", "खोल", "केट", "के ", "कुन", "की ", "एको", "उनु",
    "ई ज", "अन्", " हु", " हा", " शि", " यस", " मा", " मह", " म ", " प्",
    " पु", " पन", " नि", " दि", " ति", " जन", " खो", " कु", " कि", " कस",
    "्षा", "्षह", "्वि", "्वप", "्वक", "्व ", "्ले", "्रो", "्रि", "्र ",
    "्यो", "्यव", "्मज", "्नो", "्ने", "्न ", "्थी", "्ता", "्ण ", "्ट्",
    "्टै", "्झन", "्छु", "्चै", "्कु", "् र", "् त", "ोषण", "ोलि", "ोला",
    "ो व", "ो ल", "ो र", "ो भ", "ो प", "ो न", "ो ध", "ो थ", "ो ठ", "ो छ",
    "ो आ", "ो अ", "ैसि", "ैयक", "ैको", "ै ह", "ै स", "ै व", "ै य", "ै भ",
    "ै ब", "ै न", "ै ज", "ै छ", "ै ख", "ै आ", "ै अ", "ेही", "ेरे", "ेरि",
    "ेदभ", "ेटी", "ेटा", "ेख्", "ेखि", "ेकी", "े ह", "े श", "े भ", "े फ",
    "े ध", "े ग", "े क", "े उ", "े आ", "ृत्", "ूसँ", "ूले", "ूला", "ूर्",
    "ूमा", "ूकी", "ू व", "ू ब", "ू थ", "ू ज", "ू छ", "ुहु", "ुस्", "ुरक",
];

// Hebrew
pub const HEB: &[&str] = &[
    "ים ", "ות ", "הם ", "ו ב", "יות", "ון ", " כל", "עלי", "נו ", "יה ",
    "או ", " על", " חו", " או", "ם ל", "ליה", "להם", "ל א", "כל ", "ית ",
    "ין ", "יהם", "חר ", "דם ", "אחר", "אדם", " של", " שא", " מה", " לא",
    " יו", " המ", " הי", "ת ש", "ת ו", "ת ה", "ת א", "שון", "שה ", "רות",
    "רה ", "ר ה", "ני ", "ן ה", "מן ", "מי ", "ם ש", "ם ו", "ם ה", "לשו",
    "ליד", "לחי", "ל מ", "חנו", "זמן", "זכו", "ויו", "וב ", "ו ל", "המו",
    "ה ל", "ד ה", "ברי", "בים", " ול", " הע", " הא", " בע", " אי", " אח",
    " אד", "תר ", "שלה", "שים", "שוב", "שאנ", "רית", "רים", "ר מ", "ר י",
    "קשה", "קר ", "עוב", "עו ", "עה ", "עבר", "עבד", "ספר", "נשי", "נחנ",
    "ן ש", "מור", "ם ע", "ם מ", "ם ח", "ם ב", "לל ", "ליך", "לא ", "ל ב",
    "כך ", "כוי", "ך כ", "יש ", "ירו", "יך ", "יד ", "י ש", "י מ", "י ה",
    "חיר", "חיי", "חוש", "חבר", "ותר", "ושב", "ורה", "וקר", "ולח", "וח ",
    "ו מ", "ו ח", "הר ", "העב", "היה", "ה ע", "ה ב", "דעה", "דים", "דות",
    "ברו", "בר ", "בעב", "בני", "בלי", "בל ", "בדו", "ב ע", "את ", "אנח",
    "איש", "א ה", " שע", " שנ", " מי", " מא", " לפ", " לנ", " לל", " לי",
    " לח", " לה", " יש", " וח", " וה", " וב", " הס", " הל", " דע", " בר",
    " בס", " בנ", " בי", " את", " אמ", " אל", "תנו", "תלמ", "תכע", "תכל",
    "תיה", "תי ", "תוח", "תוב", "תו ", "תגע", "תבו", "ת ל", "ת כ", "ת ב",
    "שעש", "שעו", "שנש", "שנק", "שני", "שן ", "שמח", "שלי", "של ", "שכר",
    "שי ", "שול", "שוו", "שו ", "שהם", "שהי", "שבי", "שבו", "שב ", "שאר",
    "שאס", "ש ל", "ש ב", "רתי", "רעה", "רכם", "רך ", "רין", "רזה", "רוי",
    "רוח", "רו ", "רבי", "ראו", "ר ש", "ר ל", "ר כ", "ר ח", "ר ז", "ר ו",
    "קרא", "קני", "קדמ", "קבע", "קבל", "ק א", "צפו", "צבע", "צא ", "פתו",
    "פשה", "פרי", "פר ", "פלי", "פיכ", "פות", "פון", "פול", "פוי", "עשו",
    "ערכ", "עס ", "עמי", "עמד", "עם ", "על ", "עיו", "עהו", "עגע", "ע ה",
    "ע א", "סתכ", "סור", "סוף", "סד ", "ס ע", "נקב", "ננו", "נין", "נים",
    "נות", "נול", "נהר", "נהו", "נה ", "ן ל", "ן ו", "ן ד", "ן א", "מתג",
    "מרה", "מקב", "מצפ", "מעמ", "מין", "מים", "מיה", "מיד", "מטע", "מחר",
    "מחב", "מוצ", "מוס", "מהר", "מהם", "מהז", "מה ", "מדע", "מד ", "מבל",
    "מאי", "מאו", "מא ", "ם נ", "ם כ", "ם י", "ם ז", "ם א", "לשה", "לפת",
];

pub const YDD: &[&str] = &[
    "ער ", " זי", "ען ", "ן א", "ון ", "דער", " פֿ", " או", " וו", " גע",
    " אַ", "און", "זיי", "די ", " די", "ן ד", "ין ", " אי", "ן ג", "יי ",
    "ט א", "האָ", "אַר", " הא", " אָ", "רן ", "פֿא", "נען", "ן ו", "ווע",
    "אַל", "ֿאַ", " מי", "ערע", "ענע", "בן ", "אין", "אָר", "אַנ", " מע",
    "רײַ", "ענט", "נדע", "ן פ", "ן ז", "ייע", "זענ", "אָס", "אָט", "ָס ",
    "ָט ", "ַנד", " צו", " דע", "ײַ ", "ר א", "פֿר", "ערן", "עכט", "ניש",
    "נטש", "נגע", "ן מ", "מענ", "לן ", "כט ", "ישט", "יר ", "יך ", "יינ",
    "יט ", "טן ", "טאָ", "ט ז", "ווי", "ווא", "ואָ", "גן ", "אָנ", "אָב",
    "אַצ", "ַצי", " רע", " לע", " זע", "שן ", "שטא", "שט ", "רער", "רעכ",
    "רע ", "ראַ", "ר מ", "ר ד", "צו ", "פֿו", "ן ש", "ן ב", "מיר", "מיי",
    "כער", "יער", "ינע", "ינד", "ייט", "י ז", "זיך", "ום ", "געב", "אָל",
    "אָד", "אַז", "ֿרײ", "ֿון", "ָדע", "ָבן", "ַלט", "ַך ", "ַז ", " שו",
    " פּ", " ני", " יע", " דא", "ײַך", "ײַט", "ײַה", "שפּ", "ש ה", "רקי",
    "רין", "רגן", "ר ש", "ר צ", "ר נ", "ר ז", "ר ה", "קער", "קלא", "קינ",
    "קיי", "קט ", "קאַ", "צײַ", "ציע", "ציא", "צום", "פֿע", "פֿט", "פּע",
    "פּא", "ערי", "עקו", "עפֿ", "עם ", "עלי", "עוו", "עדע", "עגן", "עבן",
    "עבו", "סן ", "ס מ", "ס ז", "נער", "נאַ", "ן ר", "ן צ", "מער", "מיט",
    "מאָ", "לער", "לעכ", "לעב", "לע ", "לט ", "לאַ", "ך פ", "ך א", "יקע",
    "יענ", "יעד", "יע ", "יכע", "יז ", "יאָ", "י מ", "י ל", "י ט", "י ה",
    "י ג", "י א", "טשן", "טש ", "טיש", "טיק", "טאַ", "ט פ", "ט ו", "ט ד",
    "זאָ", "ז מ", "ז ז", "וער", "וען", "ו פ", "היי", "דאָ", "געש", "געק",
    "גען", "געז", "געו", "בײַ", "באַ", "איז", "אָן", "אַפ", "אַמ", "אַ ",
    "ָרן", "ָרג", "ָנג", "ָן ", "ָלי", "ַרש", "ַרב", "ַפֿ", "ַמע", "ַלע",
    "ַלן", "ַט ", "ַהי", "ַ א", " קי", " קא", " צײ", " מא", " טא", " גי",
    " בי", " בא", "ײַס", "ײַנ", "ײַל", "ײַב", "תּל", "שרײ", "שקל", "שער",
    "שמי", "שלע", "שכל", "שום", "שול", "שוי", "שוו", "שאָ", "שאַ", "רשפ",
    "רשו", "רשא", "רפֿ", "רענ", "רעל", "רני", "רנא", "רמע", "רימ", "רט ",
    "רזע", "רוד", "רבײ", "רבר", "ר ק", "ר פ", "ר ס", "ר ט", "ר ו", "קען",
    "קן ", "קוק", "קומ", "קאָ", "ק פ", "ציִ", "פֿן", "פּש", "פּר", "ף ז",
    "עשמ", "עשל", "ערײ", "ערש", "ערק", "ערנ", "ערז", "עקל", "עסן", "עס ",
];

// Arabic
pub const ARB: &[&str] = &[
    " ال", " أو", "هم ", "أو ", "و ا", "ون ", "ن ا", "ة و", "في ", "الح",
    " وا", " من", " في", "ي ا", "وال", "وا ", "مة ", "ان ", "الم", "أي ",
    "أن ", " أن", "ين ", "ن ي", "ن أ", "لا ", "ة أ", "الو", "الت", "الأ",
    "ية ", "ي أ", "نا ", "من ", "ما ", "م أ", "لحق", "كل ", "كان", "دا ",
    "ة ا", "ب ا", "الن", "الع", "الس", "است", "ا ي", "ا و", "آخر", " يو",
    " يع", " وي", " لك", " لا", " كا", " أي", " أح", "ييز", "يهم", "يز ",
    "وقت", "وق ", "و أ", "نهم", "نه ", "ن ن", "ن ف", "ميي", "ميل", "منه",
    "مل ", "معل", "م و", "ليه", "لوق", "لوا", "لنه", "لمع", "لمة", "لكل",
    "لسي", "لذي", "لدي", "لحر", "لتم", "لة ", "لام", "ل ي", "ل ف", "ل ب",
    "ل ا", "كتب", "كاف", "قوق", "قد ", "قت ", "قاق", "ق و", "فة ", "علم",
    "ع ا", "صل ", "ستر", "س أ", "رقا", "رة ", "را ", "رأي", "دين", "دون",
    "د أ", "خرو", "خر ", "حقو", "حق ", "حري", "جمي", "جد ", "تمي", "ترق",
    "ت ا", "ة ب", "بوا", "بهم", "بكا", "بعض", "امة", "الل", "الك", "الق",
    "الر", "الذ", "الج", "الا", "الإ", "ال ", "اق ", "افة", "ارد", "ات ",
    "ا م", "ا ف", "ا ع", "ا ا", "ا أ", "أخر", " يج", " وض", " نح", " دو",
    " جم", " تم", " بك", " بع", " بس", " بج", " اس", " إن", " آخ", "يوم",
    "يول", "يوج", "يه ", "ينا", "يمش", "يمة", "يلة", "يلا", "يكو", "يكت",
    "يقر", "يق ", "يفت", "يعم", "يعت", "يعا", "يع ", "يرا", "ير ", "يذ ",
    "يد ", "يحظ", "يحص", "يجو", "يجب", "يتأ", "يام", "ياس", "يات", "ياة",
    "يء ", "ي و", "ي ه", "ي ن", "ي م", "ي ر", "ي ذ", "ي ت", "ي آ", "ى ج",
    "وين", "ويك", "ويق", "ويح", "وهب", "وه ", "وم ", "ولد", "وكا", "وقد",
    "وعل", "وطن", "وضم", "وضع", "وضا", "وصل", "وسل", "وز ", "وح ", "وجد",
    "وتج", "وة ", "وار", "وات", "واب", "وأن", "و ب", "هما", "هر ", "هذا",
    "هبو", "هب ", "هاي", "ها ", "ه م", "ه ل", "ه س", "ه خ", "ني ", "نوا",
    "نهر", "نها", "نلا", "نقض", "نظر", "نصر", "نسا", "نس ", "ندم", "نحو",
    "نحب", "نب ", "ناس", "ن ل", "ن ك", "ن ح", "ن ج", "ن ب", "ميع", "مير",
    "ميذ", "مهم", "منا", "مقا", "مع ", "مشو", "مزي", "مرة", "مر ", "مدر",
    "متع", "متس", "مت ", "ماع", "م م", "م ط", "م ت", "م ب", "م ا", "م إ",
    "لى ", "لوه", "لون", "لوط", "لهم", "لنا", "لمي", "لمز", "لمد", "للو",
    "للغ", "لكن", "لكر", "لكت", "لك ", "لقر", "لقد", "لغت", "لغة", "لعن",
];

pub const PES: &[&str] = &[
    "ند ", " و ", " می", "می\u{200c}", "ه د", "ان ", "که ", "از ", "د و", " که",
    " به", " از", "ها ", "شان", "به ", "\u{200c}ها", "یم ", "یت ", "هر ", "های",
    "ه ب", "ده ", "د ب", " هر", " رو", " دا", " با", "یگر", "ی ک", "گر ",
    "ود ", "م م", "ست ", "ر ک", "دیگ", "دند", "تما", "بود", " کن", " کس",
    " دی", " در", " بو", " بر", "یچ ", "یه ", "یشا", "ید ", "یا ", "کنن",
    "کس ", "کر ", "ون ", "وقت", "هیچ", "ه آ", "نند", "نم ", "ن ر", "م ب",
    "لم ", "شت ", "زاد", "ری ", "روز", "رد ", "را ", "ر م", "در ", "دار",
    "خوا", "خان", "ته ", "ت ک", "برا", "بای", "با ", "ایش", "اید", "انی",
    "است", "اد ", "ا ه", "آزا", " وق", " هی", " هم", " عق", " را", " حق",
    " تم", " آن", " آز", "\u{200c}گذ", "\u{200c}کن", "ی\u{200c}گ", "ی\u{200c}ک", "ی\u{200c}ر", "یی ", "یلی",
    "یز ", "یده", "ی ن", "ی ر", "گی ", "گرد", "گذر", "گاه", "کرد", "چه\u{200c}",
    "وق ", "وز ", "ودن", "وان", "و ک", "و ه", "و ب", "و ا", "ه\u{200c}ه", "هست",
    "ه ک", "ه م", "ه ش", "ه ت", "ه ا", "نیم", "نی ", "نگا", "نگ ", "نها",
    "نه ", "نبا", "ن ه", "معل", "مام", "ما ", "م ا", "لی ", "قید", "قوق",
    "قتی", "فکر", "علم", "عقی", "شده", "سیا", "سته", "ستش", "زها", "ز م",
    "ز ب", "رها", "رند", "رفت", "ردا", "رای", "راد", "ر ر", "ر ب", "ر ا",
    "دگی", "دون", "دان", "داش", "د د", "خیل", "حیث", "حقو", "تی ", "تند",
    "تشا", "ت و", "ت ب", "بچه", "بدو", "بان", "ایی", "اه ", "انم", "اند",
    "ام ", "اشت", "اری", "اره", "ار ", "ادی", "ادر", "ا ن", "ا م", "ا ر",
    "ا خ", "ا ب", "آنه", " یا", " کر", " نگ", " نب", " مع", " ما", " فک",
    " شد", " خی", " خو", " خا", " حی", " بچ", " بد", " ام", " اس", "\u{200c}من",
    "\u{200c}شو", "\u{200c}رو", "\u{200c}رف", "\u{200c}خو", "\u{200c}تو", "\u{200c}تر", "\u{200c}آی", "ی\u{200c}ه", "ی\u{200c}ش", "ی\u{200c}خ",
    "ی\u{200c}ت", "ی\u{200c}آ", "یکد", "ینک", "یند", "ین ", "یمی", "یلا", "یشت", "یسن",
    "یست", "یزه", "یر ", "یدن", "یثی", "یث ", "یاس", "یار", "ی ی", "ی و",
    "ی م", "ی ع", "ی س", "ی د", "ی خ", "ی ت", "ی ا", "گون", "گفت", "گ ش",
    "کنی", "کنم", "کنا", "کلی", "کسا", "کدی", "کتا", "کار", "ژاد", "چیز",
    "چون", "چنی", "چ گ", "چ ک", "چ چ", "پشت", "ویم", "ویس", "ونه", "وند",
    "ولا", "وقع", "وضع", "وصا", "وست", "وزه", "ودخ", "وح ", "وجه", "وجد",
    "وت ", "واه", "واس", "وا ", "و و", "و ل", "و ف", "و س", "و د", "و ح",
    "ه\u{200c}م", "هیم", "هوا", "هم\u{200c}", "همچ", "همه", "هم ", "هره", "هب ", "ه ی",
];

pub const URD: &[&str] = &[
    "یں ", "ان ", "ہیں", "ور ", "اور", " او", " ان", "ے ہ", "سے ", " ہی",
    " سے", " اس", "ہے ", "کے ", "رے ", " کی", "وں ", "نی ", "اس ", "ا ک",
    " کے", " کا", " جا", "ے ک", "ے ا", "یا ", "ی ا", "ں ا", "کا ", "ارے",
    " ہے", " ہو", " کہ", " کر", " نہ", "ے ب", "کی ", "کہ ", "نے ", "نہی",
    "ن ک", "میں", "ر ن", "تے ", "ئی ", " یا", " می", " حق", " تھ", "ے گ",
    "ے پ", "ے ت", "یے ", "یاد", "ی ن", "ی ت", "ی ب", "ہوئ", "ہم ", "ہت ",
    "ہ ک", "ہ پ", "ہ ا", "ھے ", "ھا ", "ں پ", "ں س", "گا ", "چے ", "پنی",
    "وئی", "نہ ", "شخص", "زاد", "ر س", "ر ا", "دی ", "خص ", "حق ", "تہ ",
    "ت س", "بہت", "اپن", "انی", "انہ", "ام ", "ائی", "ئے ", "آزا", " ہم",
    " کو", " پر", " نے", " لو", " شخ", " سا", " بہ", " بچ", " اپ", " آز",
    "ے و", "ے س", "ے آ", "یوں", "یر ", "ی ہ", "ی ط", "ی ج", "ہی ", "ہوں",
    "ہست", "ہر ", "ہا ", "ہ و", "ھی ", "ھر ", "ھ ک", "ھ ب", "ں ک", "ں ن",
    "کہا", "کھا", "کچھ", "کوئ", "کل ", "کر ", "چھ ", "پھر", "پر ", "وہ ",
    "وقت", "وق ", "وئے", "و ا", "نار", "نا ", "ن س", "مام", "م ک", "م م",
    "لے ", "لوگ", "ل ک", "قوق", "قت ", "ق ہ", "ق ک", "طرف", "سی ", "ستہ",
    "ستا", "سات", "زیا", "رہے", "رف ", "ر ش", "ر ح", "ر ب", "دہ ", "حقو",
    "جو ", "جات", "جا ", "تی ", "تھے", "تھ ", "تما", "تان", "ت ی", "ت ہ",
    "ت ک", "بچے", "بار", "اں ", "است", "ادی", "ادہ", "اد ", "اتے", "اتھ",
    "ا س", "ا ا", "ئیں", "آہس", " ہر", " گز", " گا", " کچ", " چا", " پہ",
    " پھ", " پڑ", " وہ", " وق", " مس", " لی", " عق", " طر", " زی", " رہ",
    " دی", " دو", " جو", " جن", " تم", " بی", " بھ", " با", " اع", " آہ",
    "ے ن", "ے م", "ے ل", "ے ع", "ے ز", "ے ج", "یکھ", "یکن", "یک ", "یٹھ",
    "یون", "یق ", "یعت", "یرہ", "یدے", "یدا", "یثی", "یت ", "یاں", "یان",
    "یاس", "ی گ", "ی ک", "ی چ", "ی م", "ی ق", "ی ش", "ی ح", "ہیے", "ہوگ",
    "ہو ", "ہنچ", "ہما", "ہلے", "ہب ", "ہ ہ", "ہ ر", "ہ د", "ہ آ", "ھیں",
    "ھٹی", "ھول", "ھائ", "ھ گ", "ھ ر", "ں ہ", "ں گ", "ں چ", "ں م", "ں ل",
    "ں ض", "ں ج", "ں ب", "گی ", "گہو", "گوں", "گزر", "گزا", "گئے", "گ س",
    "کیے", "کیو", "کیا", "کھی", "کھو", "کول", "کو ", "کنا", "کن ", "کسی",
    "کری", "کرن", "کرت", "کرا", "کتا", "کب ", "کاپ", "ک ک", "ک د", "ڑے ",
    "ڑھ ", "ڈی ", "چھٹ", "چوں", "چلت", "چتے", "چاہ", "چار", "پید", "پیا",
];

// Ethiopic
pub const AMH: &[&str] = &[
    "ነት ", "ቸው ", "ጊዜ ", "ይም ", "ው በ", "ወይም", "ነበር", "ት በ", "በር ", "ሰው ",
    "ለው ", " ጊዜ", " ወይ", " ነበ", "ውን ", "ንዱ ", "በወን", "ራቸው", "ም የ", " እን",
    " አስ", " ነገ", " በወ", " ሰው", "ገር ", "ዳንዱ", "ዱ ሰ", "ያንዳ", "የሌላ", "ዎች ",
    "ውስጥ", "ው አ", "ው ነ", "እያን", "ንዳን", "ን እ", "ናት ", "ና በ", "ነጻነ", "ነገር",
    "ቻቸው", "ቸውን", "ትም ", "ት ያ", "ት አ", "ት መ", "ብት ", "ስጥ ", "ሰብ ", "ምህሯ",
    "ም በ", "ም መ", "መብት", "መምህ", "ሌላ ", "ለን ", "ለች ", "ለም ", "ለሁ ", "ህሯ ",
    "ሃለሁ", " ይሄ", " የተ", " የሰ", " የሌ", " ውስ", " ከም", " እያ", " እና", " አለ",
    " ነጻ", " ብዙ", " በዚ", " መብ", " መም", " ሁሉ", "ፖለቲ", "ፍጥነ", "ፍት ", "ፍተው",
    "ፍሪቃ", "ፋቸው", "ፋሉ ", "ፉ ጠ", "ፈጥሮ", "ፈገግ", "ፈው ", "ፈስ ", "ፈላጊ", "ጾታ ",
    "ጽፉ ", "ጽሐፋ", "ጻና ", "ጻነቶ", "ጻነት", "ጵያ ", "ጥነት", "ጥሮ ", "ጥ የ", "ጥ ና",
    "ጣባቸ", "ጣም ", "ጠገብ", "ጠየቀ", "ጠው ", "ጠዋት", "ጠቃሚ", "ጠ አ", "ግዳጅ", "ግን ",
    "ግበት", "ግራቸ", "ግ አ", "ጌ ት", "ጋይነ", "ጋር ", "ጊ ነ", "ጉትን", "ገግ ", "ገዩ ",
    "ገና ", "ገብ ", "ገባዋ", "ገልጋ", "ገ ብ", "ጆቹም", "ጅ አ", "ጅ ሁ", "ጃ ል", "ድማማ",
    "ድመው", "ድሃለ", "ድ ወ", "ድ ነ", "ዳጅ ", "ዳይዘ", "ዳቸው", "ዳሉ ", "ዳለው", "ዲጽፉ",
    "ዱ ነ", "ዱ ሌ", "ደገና", "ደብተ", "ደረግ", "ደረጉ", "ደረጃ", "ደረሱ", "ዮጵያ", "ይገባ",
    "ይደረ", "ይያዝ", "ይዘገ", "ይወት", "ይኖረ", "ይነት", "ይችላ", "ይማኖ", "ይሄዳ", "ይሄዱ",
    "ያደረ", "ያዝም", "ያነቡ", "ያቱም", "ያም ", "ያልፋ", "ያለው", "ያ ጠ", "ያ አ", "ዩነት",
    "ዩ ነ", "የፖለ", "የጾታ", "የዘር", "የነጻ", "የኅብ", "የቻቸ", "የትው", "የተፈ", "የተዘ",
    "የብሔ", "የበለ", "የቋን", "የቀኑ", "የቀቻ", "የቀለ", "የሰው", "የሰላ", "የመኖ", "የለም",
    "የሃይ", "የሀብ", "ዝቃዛ", "ዝም ", "ዜ ይ", "ዜ ያ", "ዜ የ", "ዜ ሌ", "ዛ ነ", "ዚያም",
    "ዚያ ", "ዚህ ", "ዙዎቻ", "ዙ ጊ", "ዙ አ", "ዘገዩ", "ዘር ", "ዘሩት", "ዘረዘ", "ዓመታ",
    "ዎቻች", "ውና ", "ውቅ ", "ውሳኔ", "ውልድ", "ው ጊ", "ው የ", "ው እ", "ው ተ", "ው ሰ",
    "ው መ", "ው ል", "ዋት ", "ዋልና", "ዋል ", "ዋለች", "ዊ ወ", "ወድሃ", "ወዳቸ", "ወዳለ",
    "ወንድ", "ወንዙ", "ወንበ", "ወት ", "ወለድ", "ክንያ", "ክብር", "ካ ወ", "ኩልነ", "ከፍተ",
    "ከዚያ", "ከት ", "ከምን", "ከምና", "እወድ", "እኩል", "እንዳ", "እንዲ", "እንደ", "እናታ",
    "እናስ", "እረፍ", "ኢትዮ", "አፍሪ", "አጠገ", "አገል", "አይያ", "አየቻ", "አንዱ", "አስፈ",
    "አስተ", "አስብ", "አሮጌ", "አለው", "አለች", "ኖት ", "ኖር ", "ኖረና", "ንፈስ", "ንድማ",
    "ንዳይ", "ንዲጽ", "ንደገ", "ንያቱ", "ንዙ ", "ንወዳ", "ንበራ", "ንቋ ", "ንም ", "ን ይ",
    "ን ያ", "ን ከ", "ን ነ", "ን በ", "ን ቀ", "ኔ ው", "ናውቅ", "ናታቸ", "ናስባ", "ናሳል",
    "ናል ", "ና ፈ", "ና የ", "ና እ", "ና ነ", "ና ስ", "ና ሕ", "ኑ አ", "ነጻና", "ነግራ",
];

pub const TIR: &[&str] = &[
    "ቶም ", " ኣብ", "ኣብ ", "ድማ ", "ወይ ", "ሰብ ", "ሮም ", " ድማ", " ወይ", " ነይ",
    " ሰብ", " መሰ", "ይ ብ", "ናጽነ", "ነት ", "ትን ", "ምህር", "መዓል", "መሰል", "ልን ",
    " ከይ", " ምስ", " መዓ", "ፍሲ ", "ፍ ሰ", "ጽነት", "ግዜ ", "ይሮም", "ዓልቲ", "ዊ ወ",
    "ዊ መ", "ወከፍ", "ኻልእ", "ከፍ ", "እያ ", "እዩ ", "ኣለዎ", "ን ይ", "ን መ", "ነፍሲ",
    "ነይሮ", "ት ወ", "ት ኣ", "ታት ", "ብኻል", "ብቲ ", "ብ ኣ", "ሲ ወ", "ሰል ", "ርቶም",
    "ራዊ ", "ም ከ", "ም እ", "ም መ", "መምህ", "ሎም ", "ልእ ", "ልቲ ", "ል ኣ", "ለዎ ",
    "ህርቶ", " ግዜ", " ይኸ", " ይሓ", " ወከ", " እዩ", " ኣገ", " ኣዝ", " ኣረ", " ኣለ",
    " ንሓ", " ናጽ", " ነፍ", " ብኻ", " ብሕ", " ብሃ", " መም", "ፖለቲ", "ፎ ግ", "ፍቶም",
    "ፍቲ ", "ፍሽኽ", "ፊቶም", "ፊቐካ", "ፉ ሓ", "ፈን ", "ፈትዎ", "ፈስ ", "ፈላለ", "ፈለጥ",
    "ጾታ ", "ጽነታ", "ጽባሕ", "ጽሕፉ", "ጽሑ ", "ጻሕፍ", "ጸ ኣ", "ጦም ", "ጥናየ", "ጥቓ ",
    "ጥቀም", "ጢፈን", "ግዱድ", "ግናኸ", "ግባእ", "ግሎት", "ግሆ ", "ጊት ", "ጊራቶ", "ጊም ",
    "ጉዩ ", "ገዳሲ", "ገበር", "ገር ", "ገልግ", "ጅ እ", "ጃ ከ", "ድንጉ", "ድሮ ", "ድሕዱ",
    "ድሕሪ", "ድ ኣ", "ዳሲ ", "ዳ ግ", "ዲኦም", "ዱድ ", "ዱ ነ", "ዱ ብ", "ደጊም", "ደት ",
    "ደብተ", "ደረጃ", "ደሎ ", "ይፈለ", "ይግባ", "ይድን", "ይውለ", "ይኸዳ", "ይኸዱ", "ይኑ ",
    "ይተፈ", "ይራ ", "ይሩ ", "ይማኖ", "ይሕዝ", "ይሓስ", "ይሓል", "ይ ኣ", "ይ ም", "ያዳ ",
    "ያቱ ", "ዩ ኢ", "ዩ ነ", "ዩ ቆ", "የንብ", "የን ", "የቶም", "የለን", "የ ኣ", "የ ና",
    "ዝገበ", "ዝያዳ", "ዝዩ ", "ዝየ ", "ዝኾነ", "ዝን ", "ዝተዘ", "ዝተዓ", "ዝበለ", "ዜ ዝ",
    "ዜ ክ", "ዚ ኣ", "ዚ ብ", "ዙሓት", "ዘርዘ", "ዘርኢ", "ዘሩ ", "ዘሎ ", "ዕረፍ", "ዕረ ",
    "ዓደሎ", "ዓመታ", "ዓልን", "ዓልታ", "ዑ ድ", "ዎም ", "ዎ ክ", "ውዓል", "ውነታ", "ውሕስ",
    "ውለድ", "ዋጅ ", "ዋን ", "ወና ", "ዃኑ ", "ኾነ ", "ኽንያ", "ኽ ድ", "ኸዳ ", "ኸዱ ",
    "ኸ መ", "ኮይኑ", "ክጽሕ", "ክጥቀ", "ክትሓ", "ክተሓ", "ክብር", "ክህል", "ካዊ ", "ካባና",
    "ካልኦ", "ካልን", "ካ እ", "ኩሉ ", "ከፊቶ", "ከይፈ", "ከይድ", "ከይተ", "ኦት ", "ኦም ",
    "እየ ", "እዚ ", "እዋን", "እንፈ", "እነሕ", "እ ደ", "እ ኣ", "ኣገዳ", "ኣገል", "ኣዲኦ",
    "ኣይሕ", "ኣየቶ", "ኣዝዩ", "ኣዝየ", "ኣዋጅ", "ኣካል", "ኣእያ", "ኣብዚ", "ኣረጊ", "ኣረኣ",
    "ኢሎም", "ኢልና", "ኡ ደ", "ኖት ", "ንፈት", "ንፈስ", "ንግሆ", "ንጉዩ", "ንያቱ", "ንብቡ",
    "ንባር", "ንቋ ", "ንሓድ", "ንሓስ", "ን ዝ", "ን ዕ", "ን ው", "ን ክ", "ን እ", "ን ና",
    "ን ማ", "ን ሕ", "ናፊቐ", "ናይ ", "ናየን", "ናኸ ", "ናን ", "ናብቲ", "ናብሮ", "ና ጽ",
    "ና እ", "ና ን", "ኑ ን", "ኑ ብ", "ነጊራ", "ነገር", "ነይራ", "ነይሩ", "ነትን", "ነታዊ",
    "ነታት", "ነሕል", "ነ ሰ", "ትዎም", "ትውዓ", "ትምህ", "ትሓር", "ት ድ", "ት ይ", "ት ካ",
    "ት እ", "ት ት", "ት ተ", "ት ቤ", "ት ቀ", "ታዊ ", "ታትን", "ታ ን", "ቲካዊ", "ቲ ድ",
];
