//! Static key-press table: firmware key code → display label.
//!
//! Synonyms (short and long forms) appear as separate entries mapping to the
//! same label. The first code listed for a label is its canonical code, used
//! when a label is turned back into a directive.

/// `&kp` argument → label.
pub const KEY_PRESS_TABLE: &[(&str, &str)] = &[
    // Letters
    ("A", "A"),
    ("B", "B"),
    ("C", "C"),
    ("D", "D"),
    ("E", "E"),
    ("F", "F"),
    ("G", "G"),
    ("H", "H"),
    ("I", "I"),
    ("J", "J"),
    ("K", "K"),
    ("L", "L"),
    ("M", "M"),
    ("N", "N"),
    ("O", "O"),
    ("P", "P"),
    ("Q", "Q"),
    ("R", "R"),
    ("S", "S"),
    ("T", "T"),
    ("U", "U"),
    ("V", "V"),
    ("W", "W"),
    ("X", "X"),
    ("Y", "Y"),
    ("Z", "Z"),
    // Digits
    ("N1", "1"),
    ("NUMBER_1", "1"),
    ("N2", "2"),
    ("NUMBER_2", "2"),
    ("N3", "3"),
    ("NUMBER_3", "3"),
    ("N4", "4"),
    ("NUMBER_4", "4"),
    ("N5", "5"),
    ("NUMBER_5", "5"),
    ("N6", "6"),
    ("NUMBER_6", "6"),
    ("N7", "7"),
    ("NUMBER_7", "7"),
    ("N8", "8"),
    ("NUMBER_8", "8"),
    ("N9", "9"),
    ("NUMBER_9", "9"),
    ("N0", "0"),
    ("NUMBER_0", "0"),
    // Modifiers
    ("LCTRL", "CTRL"),
    ("LCTL", "CTRL"),
    ("LEFT_CONTROL", "CTRL"),
    ("RCTRL", "RCTL"),
    ("RIGHT_CONTROL", "RCTL"),
    ("LSHFT", "SHFT"),
    ("LSHIFT", "SHFT"),
    ("LEFT_SHIFT", "SHFT"),
    ("RSHFT", "RSFT"),
    ("RSHIFT", "RSFT"),
    ("RIGHT_SHIFT", "RSFT"),
    ("LALT", "ALT"),
    ("LEFT_ALT", "ALT"),
    ("RALT", "RALT"),
    ("RIGHT_ALT", "RALT"),
    ("LGUI", "GUI"),
    ("LEFT_GUI", "GUI"),
    ("LCMD", "GUI"),
    ("LWIN", "GUI"),
    ("RGUI", "RGUI"),
    ("RIGHT_GUI", "RGUI"),
    ("RCMD", "RGUI"),
    ("RWIN", "RGUI"),
    // Whitespace and editing
    ("SPACE", "SPC"),
    ("SPC", "SPC"),
    ("RET", "ENT"),
    ("ENTER", "ENT"),
    ("RETURN", "ENT"),
    ("TAB", "TAB"),
    ("BSPC", "BSPC"),
    ("BACKSPACE", "BSPC"),
    ("DEL", "DEL"),
    ("DELETE", "DEL"),
    ("ESC", "ESC"),
    ("ESCAPE", "ESC"),
    ("INS", "INS"),
    ("INSERT", "INS"),
    ("HOME", "HOME"),
    ("END", "END"),
    ("PG_UP", "PGUP"),
    ("PAGE_UP", "PGUP"),
    ("PG_DN", "PGDN"),
    ("PAGE_DOWN", "PGDN"),
    ("CAPS", "CAPS"),
    ("CAPSLOCK", "CAPS"),
    ("CAPS_LOCK", "CAPS"),
    ("PSCRN", "PSCR"),
    ("PRINTSCREEN", "PSCR"),
    ("K_APP", "MENU"),
    ("K_APPLICATION", "MENU"),
    // Punctuation
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("LBKT", "["),
    ("LEFT_BRACKET", "["),
    ("RBKT", "]"),
    ("RIGHT_BRACKET", "]"),
    ("BSLH", "\\"),
    ("BACKSLASH", "\\"),
    ("SEMI", ";"),
    ("SEMICOLON", ";"),
    ("SQT", "'"),
    ("SINGLE_QUOTE", "'"),
    ("APOS", "'"),
    ("APOSTROPHE", "'"),
    ("GRAVE", "`"),
    ("COMMA", ","),
    ("DOT", "."),
    ("PERIOD", "."),
    ("FSLH", "/"),
    ("SLASH", "/"),
    ("EXCL", "!"),
    ("EXCLAMATION", "!"),
    ("AT", "@"),
    ("AT_SIGN", "@"),
    ("HASH", "#"),
    ("POUND", "#"),
    ("DLLR", "$"),
    ("DOLLAR", "$"),
    ("PRCNT", "%"),
    ("PERCENT", "%"),
    ("CARET", "^"),
    ("AMPS", "&"),
    ("AMPERSAND", "&"),
    ("STAR", "*"),
    ("ASTRK", "*"),
    ("ASTERISK", "*"),
    ("LPAR", "("),
    ("LEFT_PARENTHESIS", "("),
    ("RPAR", ")"),
    ("RIGHT_PARENTHESIS", ")"),
    ("UNDER", "_"),
    ("UNDERSCORE", "_"),
    ("PLUS", "+"),
    ("LBRC", "{"),
    ("LEFT_BRACE", "{"),
    ("RBRC", "}"),
    ("RIGHT_BRACE", "}"),
    ("PIPE", "|"),
    ("COLON", ":"),
    ("DQT", "\""),
    ("DOUBLE_QUOTES", "\""),
    ("LT", "<"),
    ("LESS_THAN", "<"),
    ("GT", ">"),
    ("GREATER_THAN", ">"),
    ("QMARK", "?"),
    ("QUESTION", "?"),
    ("TILDE", "~"),
    // Arrows
    ("LEFT", "←"),
    ("LEFT_ARROW", "←"),
    ("RIGHT", "→"),
    ("RIGHT_ARROW", "→"),
    ("UP", "↑"),
    ("UP_ARROW", "↑"),
    ("DOWN", "↓"),
    ("DOWN_ARROW", "↓"),
    // Function keys
    ("F1", "F1"),
    ("F2", "F2"),
    ("F3", "F3"),
    ("F4", "F4"),
    ("F5", "F5"),
    ("F6", "F6"),
    ("F7", "F7"),
    ("F8", "F8"),
    ("F9", "F9"),
    ("F10", "F10"),
    ("F11", "F11"),
    ("F12", "F12"),
    // Media
    ("C_VOL_UP", "VOL+"),
    ("C_VOLUME_UP", "VOL+"),
    ("C_VOL_DN", "VOL-"),
    ("C_VOLUME_DOWN", "VOL-"),
    ("C_MUTE", "MUTE"),
    ("C_PP", "PLAY"),
    ("C_PLAY_PAUSE", "PLAY"),
    ("C_NEXT", "NEXT"),
    ("C_PREV", "PREV"),
    ("C_PREVIOUS", "PREV"),
    ("C_STOP", "STOP"),
    ("C_BRI_UP", "BRI+"),
    ("C_BRIGHTNESS_INC", "BRI+"),
    ("C_BRI_DN", "BRI-"),
    ("C_BRIGHTNESS_DEC", "BRI-"),
];
