//! 情感词典
//!
//! 词条格式: (小写词, 效价)，效价范围约 [-4, 4]

pub(super) const VALENCES: &[(&str, f64)] = &[
    // ---- positive ----
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("like", 1.5),
    ("liked", 1.8),
    ("likes", 1.8),
    ("good", 1.9),
    ("great", 3.1),
    ("greatest", 3.2),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("cool", 1.3),
    ("happy", 2.7),
    ("happier", 2.4),
    ("happiness", 2.6),
    ("glad", 2.0),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("delighted", 2.9),
    ("delight", 2.9),
    ("cheerful", 2.5),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("brilliant", 2.8),
    ("superb", 3.1),
    ("perfect", 2.7),
    ("beautiful", 2.9),
    ("gorgeous", 3.0),
    ("pretty", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("pleased", 1.9),
    ("pleasant", 2.3),
    ("pleasure", 2.7),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("grateful", 2.0),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("win", 2.8),
    ("won", 2.7),
    ("winning", 2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("proud", 2.1),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("safe", 1.9),
    ("kind", 2.4),
    ("sweet", 2.0),
    ("friendly", 2.2),
    ("smile", 1.5),
    ("smiling", 2.1),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("yay", 2.4),
    ("wow", 2.8),
    ("welcome", 2.0),
    ("congratulations", 2.9),
    ("congrats", 2.4),
    ("incredible", 2.2),
    ("outstanding", 3.0),
    ("impressive", 2.3),
    ("positive", 2.6),
    ("fortunate", 1.9),
    ("lucky", 1.8),
    ("care", 2.2),
    ("caring", 2.2),
    ("helpful", 1.8),
    ("support", 1.7),
    ("trust", 2.3),
    ("free", 2.3),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("comfortable", 1.5),
    ("satisfied", 1.8),
    ("adore", 2.6),
    ("admire", 2.1),
    ("thrilled", 2.3),
    ("ecstatic", 2.3),
    ("elated", 3.2),
    ("optimistic", 1.3),
    ("inspired", 2.2),
    ("honored", 2.2),
    ("yes", 1.7),
    ("super", 2.9),
    ("interesting", 1.7),
    ("healthy", 1.7),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    ("<3", 1.9),
    // ---- negative ----
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hating", -2.3),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("horrid", -2.5),
    ("dreadful", -1.9),
    ("sad", -2.1),
    ("sadness", -1.9),
    ("unhappy", -1.8),
    ("miserable", -2.2),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("lonely", -1.5),
    ("cry", -2.1),
    ("crying", -2.1),
    ("tears", -0.9),
    ("hurt", -2.4),
    ("hurts", -2.1),
    ("pain", -2.3),
    ("painful", -1.9),
    ("angry", -2.3),
    ("anger", -2.7),
    ("mad", -2.2),
    ("furious", -2.7),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("upset", -1.6),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("lose", -1.3),
    ("lost", -1.3),
    ("losing", -1.6),
    ("loss", -1.3),
    ("wrong", -2.1),
    ("broken", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("afraid", -2.0),
    ("scared", -2.2),
    ("fear", -2.2),
    ("terrified", -3.0),
    ("nervous", -1.1),
    ("anxious", -1.0),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("tired", -1.9),
    ("bored", -1.1),
    ("boring", -1.3),
    ("ugly", -2.3),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("disgusting", -2.4),
    ("gross", -2.1),
    ("nasty", -2.6),
    ("evil", -3.4),
    ("cruel", -2.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("died", -2.6),
    ("sick", -2.3),
    ("ill", -1.8),
    ("sorry", -0.3),
    ("regret", -1.8),
    ("shame", -2.2),
    ("guilty", -1.8),
    ("alone", -1.0),
    ("abandoned", -1.9),
    ("rejected", -1.7),
    ("betrayed", -3.0),
    ("useless", -1.8),
    ("hopeless", -2.0),
    ("helpless", -2.0),
    ("poor", -2.1),
    ("damn", -1.7),
    ("crap", -1.6),
    ("sucks", -1.5),
    ("suck", -1.9),
    ("no", -1.2),
    ("cancel", -1.0),
    ("cancelled", -1.0),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("disaster", -3.1),
    ("tragic", -3.4),
    ("tragedy", -3.4),
    ("grief", -2.2),
    ("mourn", -1.9),
    ("hostile", -1.6),
    ("violent", -2.9),
    ("threat", -2.4),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("ruined", -2.3),
    ("destroyed", -2.3),
    ("nightmare", -2.3),
    ("negative", -2.7),
    ("unfair", -2.1),
    ("jealous", -2.0),
    ("embarrassed", -1.5),
    ("confused", -1.3),
    ("exhausted", -1.5),
    ("desperate", -1.3),
    (":(", -1.9),
    (":-(", -1.5),
    (":'(", -2.2),
];

/// 增强/减弱词（副词修饰），true 为增强，false 为减弱
pub(super) const BOOSTERS: &[(&str, bool)] = &[
    ("absolutely", true),
    ("amazingly", true),
    ("awfully", true),
    ("completely", true),
    ("considerably", true),
    ("deeply", true),
    ("enormously", true),
    ("entirely", true),
    ("especially", true),
    ("exceptionally", true),
    ("extremely", true),
    ("fabulously", true),
    ("greatly", true),
    ("highly", true),
    ("hugely", true),
    ("incredibly", true),
    ("intensely", true),
    ("majorly", true),
    ("more", true),
    ("most", true),
    ("particularly", true),
    ("purely", true),
    ("quite", true),
    ("really", true),
    ("remarkably", true),
    ("so", true),
    ("substantially", true),
    ("thoroughly", true),
    ("totally", true),
    ("tremendously", true),
    ("truly", true),
    ("unbelievably", true),
    ("utterly", true),
    ("very", true),
    ("almost", false),
    ("barely", false),
    ("hardly", false),
    ("less", false),
    ("little", false),
    ("marginally", false),
    ("occasionally", false),
    ("partly", false),
    ("scarcely", false),
    ("slightly", false),
    ("somewhat", false),
    ("sort", false),
];

/// 否定词
pub(super) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "without",
    "wont", "wouldnt", "rarely", "seldom", "despite",
];
