use number_spell::{Gender, SpellOptions, Speller};

fn speller() -> Speller {
    Speller::new("portuguese").unwrap()
}

fn with_options(options: SpellOptions) -> Speller {
    Speller::with_options("portuguese", options).unwrap()
}

fn female() -> Speller {
    with_options(SpellOptions {
        gender: Some(Gender::Female),
        ..SpellOptions::default()
    })
}

#[test]
fn test_basic_numbers() {
    let speller = speller();
    let cases: &[(i64, &str)] = &[
        (0, "zero"),
        (1, "um"),
        (2, "dois"),
        (3, "três"),
        (4, "quatro"),
        (5, "cinco"),
        (6, "seis"),
        (7, "sete"),
        (8, "oito"),
        (9, "nove"),
        (10, "dez"),
        (11, "onze"),
        (12, "doze"),
        (13, "treze"),
        (14, "quatorze"),
        (15, "quinze"),
        (16, "dezesseis"),
        (17, "dezessete"),
        (18, "dezoito"),
        (19, "dezenove"),
        (20, "vinte"),
        (21, "vinte e um"),
        (30, "trinta"),
        (40, "quarenta"),
        (50, "cinquenta"),
        (60, "sessenta"),
        (70, "setenta"),
        (80, "oitenta"),
        (90, "noventa"),
        (100, "cem"),
        (101, "cento e um"),
        (110, "cento e dez"),
        (111, "cento e onze"),
        (121, "cento e vinte e um"),
        (200, "duzentos"),
        (300, "trezentos"),
        (400, "quatrocentos"),
        (500, "quinhentos"),
        (600, "seiscentos"),
        (700, "setecentos"),
        (800, "oitocentos"),
        (900, "novecentos"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell(number), expected, "number {number}");
    }
}

#[test]
fn test_thousands() {
    let speller = speller();
    let cases: &[(i64, &str)] = &[
        (1000, "mil"),
        (1001, "mil e um"),
        (1010, "mil e dez"),
        (1011, "mil e onze"),
        (1021, "mil e vinte e um"),
        (1100, "mil e cem"),
        (1101, "mil, cento e um"),
        (1111, "mil, cento e onze"),
        (2000, "dois mil"),
        (9000, "nove mil"),
        (10000, "dez mil"),
        (11111, "onze mil, cento e onze"),
        (100100, "cem mil e cem"),
        (100101, "cem mil, cento e um"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell(number), expected, "number {number}");
    }
}

#[test]
fn test_millions() {
    let speller = speller();
    let cases: &[(i64, &str)] = &[
        (1000000, "um milhão"),
        (1000001, "um milhão e um"),
        (1000010, "um milhão e dez"),
        (1000100, "um milhão e cem"),
        (1000101, "um milhão, cento e um"),
        (1001000, "um milhão e mil"),
        (1001100, "um milhão, mil e cem"),
        (1001112, "um milhão, mil, cento e doze"),
        (1002000, "um milhão e dois mil"),
        (1100000, "um milhão e cem mil"),
        (1100100, "um milhão, cem mil e cem"),
        (1101000, "um milhão e cento e um mil"),
        (1101101, "um milhão, cento e um mil, cento e um"),
        (1111000, "um milhão e cento e onze mil"),
        (1111101, "um milhão, cento e onze mil, cento e um"),
        (2000000, "dois milhões"),
        (2000002, "dois milhões e dois"),
        (2200000, "dois milhões e duzentos mil"),
        (2202000, "dois milhões e duzentos e dois mil"),
        (2222202, "dois milhões, duzentos e vinte e dois mil, duzentos e dois"),
        (
            2222222,
            "dois milhões, duzentos e vinte e dois mil, duzentos e vinte e dois",
        ),
        (
            123456789,
            "cento e vinte e três milhões, quatrocentos e cinquenta e seis mil, \
             setecentos e oitenta e nove",
        ),
        (
            987654321,
            "novecentos e oitenta e sete milhões, seiscentos e cinquenta e quatro mil, \
             trezentos e vinte e um",
        ),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell(number), expected, "number {number}");
    }
}

#[test]
fn test_billions() {
    let speller = speller();
    let cases: &[(i64, &str)] = &[
        (1000000000, "um bilhão"),
        (1000000001, "um bilhão e um"),
        (1000000111, "um bilhão, cento e onze"),
        (1001000000, "um bilhão e um milhão"),
        (1010000000, "um bilhão e dez milhões"),
        (1100000001, "um bilhão, cem milhões e um"),
        (1101000000, "um bilhão e cento e um milhões"),
        (1111100001, "um bilhão, cento e onze milhões, cem mil e um"),
        (2000000000, "dois bilhões"),
        (2002000000, "dois bilhões e dois milhões"),
        (
            2222222222,
            "dois bilhões, duzentos e vinte e dois milhões, duzentos e vinte e dois mil, \
             duzentos e vinte e dois",
        ),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell(number), expected, "number {number}");
    }
}

#[test]
fn test_arbitrarily_long_numbers() {
    let speller = speller();
    assert_eq!(
        speller.spell("1001001001001001001001001001001001"),
        "um decilhão, um nonilhão, um octilhão, um septilhão, um sextilhão, \
         um quintilhão, um quatrilhão, um trilhão, um bilhão, um milhão, mil e um"
    );
}

#[test]
fn test_female_gender() {
    let speller = female();
    let cases: &[(i64, &str)] = &[
        (0, "zero"),
        (1, "uma"),
        (2, "duas"),
        (3, "três"),
        (10, "dez"),
        (21, "vinte e uma"),
        (100, "cem"),
        (101, "cento e uma"),
        (121, "cento e vinte e uma"),
        (200, "duzentas"),
        (500, "quinhentas"),
        (900, "novecentas"),
        (1000, "mil"),
        (1001, "mil e uma"),
        (1021, "mil e vinte e uma"),
        (1100, "mil e cem"),
        (1101, "mil, cento e uma"),
        (2000, "duas mil"),
        (9000, "nove mil"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell(number), expected, "number {number}");
    }
}

#[test]
fn test_word_table_options() {
    let replaced = with_options(SpellOptions {
        simple_words: Some([(1, "one".to_string())].into_iter().collect()),
        ..SpellOptions::default()
    });
    assert_eq!(replaced.spell(1), "one");

    // With an empty table nothing is spellable, which reads as zero.
    let empty = with_options(SpellOptions {
        simple_words: Some(Default::default()),
        ..SpellOptions::default()
    });
    assert_eq!(empty.spell(2), "zero");

    let female_override = with_options(SpellOptions {
        simple_words_female: Some([(1, "UMA".to_string())].into_iter().collect()),
        gender: Some(Gender::Female),
        ..SpellOptions::default()
    });
    assert_eq!(female_override.spell(1001), "mil e UMA");

    let roots = with_options(SpellOptions {
        scale_roots: Some(vec!["MILH".to_string()]),
        scale_suffixes: Some(["ÃO".to_string(), "ÕES".to_string()]),
        ..SpellOptions::default()
    });
    assert_eq!(roots.spell(1000000), "um MILHÃO");

    let zero = with_options(SpellOptions {
        zero_word: Some("nenhum".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(zero.spell(0), "nenhum");

    let hundred = with_options(SpellOptions {
        hundred_word: Some("CEM".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(hundred.spell(100), "CEM");

    let thousand = with_options(SpellOptions {
        thousand_word: Some("MIL".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(thousand.spell(1000), "MIL");
}

#[test]
fn test_separator_options() {
    let group = with_options(SpellOptions {
        group_separator: Some(" ".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(group.spell(1001001), "um milhão mil e um");

    let last = with_options(SpellOptions {
        final_separator: Some(" and ".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(last.spell(1001001), "um milhão, mil and um");

    let bare = with_options(SpellOptions {
        final_separator: Some(" ".to_string()),
        ..SpellOptions::default()
    });
    assert_eq!(bare.spell(1001001), "um milhão, mil um");
}

#[test]
fn test_include_one_thousand() {
    let speller = with_options(SpellOptions {
        include_one_thousand: Some(true),
        ..SpellOptions::default()
    });
    assert_eq!(speller.spell(1001001), "um milhão, um mil e um");
}

#[test]
fn test_currency_integers() {
    let speller = speller();
    let cases: &[(i64, &str)] = &[
        (0, "zero real"),
        (1, "um real"),
        (2, "dois reais"),
        (1000, "mil reais"),
        (1001, "mil e um reais"),
        (1002, "mil e dois reais"),
        (1021, "mil e vinte e um reais"),
        (1101, "mil, cento e um reais"),
        (2000, "dois mil reais"),
        (1000000, "um milhão de reais"),
        (2000000, "dois milhões de reais"),
        (1001001, "um milhão, mil e um reais"),
        (1002000000, "um bilhão e dois milhões de reais"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell_currency(number), expected, "number {number}");
    }
}

#[test]
fn test_currency_decimals() {
    let speller = speller();
    let cases: &[(&str, &str)] = &[
        ("0.01", "um centavo"),
        ("0.15", "quinze centavos"),
        ("0.00", "zero real"),
        ("1.00", "um real"),
        ("2.00", "dois reais"),
        ("2.01", "dois reais e um centavo"),
        ("2.50", "dois reais e cinquenta centavos"),
        ("1000.01", "mil reais e um centavo"),
        ("1101.01", "mil, cento e um reais e um centavo"),
        ("1000000.01", "um milhão de reais e um centavo"),
        ("1001001.01", "um milhão, mil e um reais e um centavo"),
        ("2000.02", "dois mil reais e dois centavos"),
        ("2000000.02", "dois milhões de reais e dois centavos"),
        ("2002002.02", "dois milhões, dois mil e dois reais e dois centavos"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell_currency(number), expected, "number {number}");
    }
}

#[test]
fn test_dollar_binding() {
    let speller = with_options(SpellOptions {
        currency: Some("dollar".into()),
        ..SpellOptions::default()
    });
    let cases: &[(&str, &str)] = &[
        ("0", "zero dólar"),
        ("1", "um dólar"),
        ("2", "dois dólares"),
        ("1000", "mil dólares"),
        ("1001", "mil e um dólares"),
        ("1000000", "um milhão de dólares"),
        ("2000000", "dois milhões de dólares"),
        ("1001001", "um milhão, mil e um dólares"),
        ("1002000000", "um bilhão e dois milhões de dólares"),
        ("0.01", "um centavo"),
        ("2.01", "dois dólares e um centavo"),
        ("1000000.01", "um milhão de dólares e um centavo"),
        ("2002002.02", "dois milhões, dois mil e dois dólares e dois centavos"),
    ];
    for &(number, expected) in cases {
        assert_eq!(speller.spell_currency(number), expected, "number {number}");
    }
}
