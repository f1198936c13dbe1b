use std::f64::consts::PI;

use glyphtone_core::{
    Channel, ChannelParams, CharacterType, Cmyk, ConversionParams, channel_value, convert,
    convert_exact,
};

const EPSILON: f64 = 1e-12;

fn identity() -> ConversionParams {
    ConversionParams::default()
}

#[test]
fn every_code_point_yields_unit_range_channels() {
    let params = identity();
    for c in 0..=0x10FFFF_i64 {
        let exact = convert_exact(c, &params);
        for channel in Channel::ALL {
            let v = exact.get(channel);
            assert!((0.0..=1.0).contains(&v), "{channel} at U+{c:X} = {v}");
        }
    }
}

#[test]
fn lowercase_a_has_zero_cyan() {
    let exact = convert_exact('a' as i64, &identity());
    assert_eq!(exact.c, 0.0);
    assert_eq!(convert('a' as i64, &identity()).cmyk.c, 0.0);
}

#[test]
fn lowercase_z_cyan_is_one_over_255() {
    let exact = convert_exact('z' as i64, &identity());
    assert!((exact.c - 1.0 / 255.0).abs() < EPSILON);
    assert_eq!(convert('z' as i64, &identity()).cmyk.c, 0.0);
}

#[test]
fn uppercase_a_magenta_is_one_over_255() {
    let exact = convert_exact('A' as i64, &identity());
    assert!((exact.m - 1.0 / 255.0).abs() < EPSILON);
    assert_eq!(convert('A' as i64, &identity()).cmyk.m, 0.0);
}

#[test]
fn digit_zero_yellow_and_magenta() {
    let exact = convert_exact('0' as i64, &identity());
    assert!((exact.y - 1.0 / 255.0).abs() < EPSILON);
    assert_eq!(exact.m, 0.0);
    let result = convert('0' as i64, &identity());
    assert_eq!(result.cmyk.y, 0.0);
    assert_eq!(result.cmyk.m, 0.0);
    assert_eq!(result.character_type, CharacterType::Number);
}

#[test]
fn devanagari_letter_black_is_slow_cosine() {
    let exact = convert_exact(0x0905, &identity());
    let expected = (5.0 * PI / 128.0).cos() / 255.0;
    assert!((exact.k - expected).abs() < EPSILON);
    // cos(5π/128) ≈ 0.99248, so k ≈ 0.00389 before rounding.
    assert!((exact.k - 0.003892).abs() < 1e-6);
    let result = convert(0x0905, &identity());
    assert_eq!(result.cmyk.k, 0.0);
    assert_eq!(result.character_type, CharacterType::OtherLetter);
}

#[test]
fn identity_params_keep_default_branches_near_zero() {
    // The divide by 255 after the offset shrinks unit-range formulas too.
    // Only the c/255 ramps on large code points get anywhere near 1.
    let low = convert('!' as i64, &identity()).cmyk;
    let zero = Cmyk {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 0.0,
    };
    assert_eq!(low, zero);

    let high = convert_exact(0x10FFFF, &identity());
    assert_eq!(high.c, 1.0);
    assert_eq!(high.y, 1.0);
    assert_eq!(high.m, 0.0);
    assert_eq!(high.k, 0.0);
}

#[test]
fn offset_255_saturates_unit_range_formulas() {
    let params = identity().with(Channel::Yellow, ChannelParams::new(1.0, 255.0, 1.0));
    // cos(0) = 1 → (1 + 255) / 255 > 1 → clamps.
    assert_eq!(convert('0' as i64, &params).cmyk.y, 1.0);
    // cos(π) = -1 → 254 / 255.
    let exact = convert_exact('5' as i64, &params);
    assert!((exact.y - 254.0 / 255.0).abs() < EPSILON);
}

#[test]
fn conversion_is_bit_identical_across_calls() {
    let params = identity().with(Channel::Magenta, ChannelParams::new(3.0, 17.0, 40.0));
    for c in [0, 48, 65, 97, 0x0905, 0x0967, 0x1F600, 0x10FFFF] {
        let a = convert_exact(c, &params);
        let b = convert_exact(c, &params);
        for channel in Channel::ALL {
            assert_eq!(a.get(channel).to_bits(), b.get(channel).to_bits());
        }
        assert_eq!(convert(c, &params), convert(c, &params));
    }
}

#[test]
fn devanagari_digit_uses_block_rule_for_black_only() {
    // U+096A DEVANAGARI DIGIT FOUR. Scale and offset of 127.5 map a raw
    // value r in [-1, 1] to (r + 1) / 2 without clamping.
    let c = 0x096A_i64;
    let unit = ChannelParams::new(1.0, 127.5, 127.5);
    let to_unit = |raw: f64| (raw + 1.0) / 2.0;

    let params = identity().with(Channel::Black, unit);
    let black = channel_value(Channel::Black, c, &params);
    let block_cosine = ((c - 0x0900) as f64 * PI / 128.0).cos();
    assert!((black - to_unit(block_cosine)).abs() < EPSILON);

    let digit_sine = (4.0 * PI / 5.0).sin();
    assert!(
        (black - to_unit(digit_sine)).abs() > 1e-3,
        "black must not use the digit sine"
    );

    let params = identity().with(Channel::Magenta, unit);
    let magenta = channel_value(Channel::Magenta, c, &params);
    assert!((magenta - to_unit(digit_sine)).abs() < EPSILON);
}

#[test]
fn changing_one_channel_leaves_others_untouched() {
    let base = identity();
    let tweaks = [
        ChannelParams::new(2.0, 0.0, 1.0),
        ChannelParams::new(1.0, 128.0, 1.0),
        ChannelParams::new(1.0, 0.0, 200.0),
    ];
    for channel in Channel::ALL {
        for tweak in tweaks {
            let changed = base.clone().with(channel, tweak);
            for c in [49, 66, 98, 0x0905, 0x0968, 300] {
                let before = convert_exact(c, &base);
                let after = convert_exact(c, &changed);
                for other in Channel::ALL.into_iter().filter(|&o| o != channel) {
                    assert_eq!(
                        before.get(other).to_bits(),
                        after.get(other).to_bits(),
                        "changing {channel} moved {other} at {c}"
                    );
                }
            }
        }
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    let params = identity();
    assert_eq!(convert(-40, &params), convert(0, &params));
    assert_eq!(convert(0x20_0000, &params), convert(0x10FFFF, &params));
    assert_eq!(convert(i64::MAX, &params).code_point, 0x10FFFF);
}
