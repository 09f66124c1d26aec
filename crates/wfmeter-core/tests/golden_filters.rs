// SPDX-License-Identifier: LGPL-3.0-or-later
//
// Golden-vector tests: each filter's impulse response is compared against a
// frozen reference vector computed once from the reference coefficient
// recurrence. Any change to a coefficient, the buffer-shift discipline or
// the section evaluation order shows up here immediately.

use wfmeter_core::filters::bank;
use wfmeter_core::filters::cascade::BiquadCascade;

const TONE_BANDPASS_IMPULSE: [f64; 64] = [
    0.001207405190260069,
    0.004244521622306566,
    0.006480589544511472,
    0.005634564408343567,
    0.001768443640540746,
    -0.004079430264100365,
    -0.010192053760695407,
    -0.014653274700693114,
    -0.01588141141185615,
    -0.013078756454588844,
    -0.006482287052224032,
    0.002648213221412972,
    0.012303102504498467,
    0.02019152153610589,
    0.024293037024017947,
    0.023359654209989318,
    0.01724718895782887,
    0.006994968909687526,
    -0.0053685160014991596,
    -0.017252852517123496,
    -0.026070883678788938,
    -0.029815011087452766,
    -0.027514845459698362,
    -0.019472749300663398,
    -0.0072231952712496885,
    0.006776959615157481,
    0.019660919754163078,
    0.028756469123558323,
    0.03215216914427387,
    0.02910365412031956,
    0.020193520411226226,
    0.007211687556201794,
    -0.007216993305928012,
    -0.02017767406806023,
    -0.02906714549633271,
    -0.03212580019096331,
    -0.028789900720209788,
    -0.019793387938660326,
    -0.007001871842632549,
    0.006982543040738401,
    0.019360154692343957,
    0.02770285402865541,
    0.030436389362686493,
    0.027139069240696083,
    0.018600305062052295,
    0.006633048348085986,
    -0.006315338546940029,
    -0.017669348148743963,
    -0.02524290229942389,
    -0.02766332417425682,
    -0.024619112796294494,
    -0.016887345378953863,
    -0.006142633554652644,
    0.005406358140952934,
    0.015473684863095496,
    0.022151188180712822,
    0.02427085659305888,
    0.021605722935870163,
    0.01487577167668146,
    0.0055658561323710855,
    -0.004399990556615142,
    -0.013056658741319756,
    -0.01878600630123225,
    -0.020618185983795466,
];

const DIN_IMPULSE: [f64; 64] = [
    9.886712475608222e-07,
    7.474921678578449e-06,
    2.7853878599853474e-05,
    7.042607743115305e-05,
    0.00013991595844509917,
    0.00023748903618991718,
    0.00036196871179538853,
    0.0005107418492521346,
    0.0006804166309519822,
    0.0008672865431442241,
    0.0010676453012447573,
    0.0012779893594439332,
    0.0014951374746371912,
    0.0017162906339540651,
    0.0019390504695102617,
    0.0021614099975344678,
    0.002381727035754455,
    0.0025986878690228282,
    0.0028112665451518887,
    0.0030186834930080175,
    0.0032203658740518615,
    0.0034159111279783994,
    0.003605054484942305,
    0.0037876407335682982,
    0.003963600207817719,
    0.004132928747866749,
    0.0042956712692045484,
    0.004451908515491432,
    0.004601746555225716,
    0.004745308595339948,
    0.004882728715636997,
    0.00501414716854276,
    0.005139706933382726,
    0.005259551259459649,
    0.005373821975135695,
    0.005482658379418748,
    0.005586196567446411,
    0.005684569071516377,
    0.005777904724963978,
    0.005866328677563093,
    0.005949962508614792,
    0.006028924397959434,
    0.00610332932629265,
    0.00617328928481875,
    0.006238913480925312,
    0.006300308531487442,
    0.006357578639068606,
    0.006410825748858873,
    0.006460149685960648,
    0.006505648273811282,
    0.006547417435210701,
    0.00658555127784366,
    0.006620142166276377,
    0.006651280782444147,
    0.006679056176499998,
    0.006703555809745687,
    0.006724865591146489,
    0.0067430699087394075,
    0.006758251657045022,
    0.006770492261367167,
    0.006779871699767348,
    0.006786468523267253,
    0.006790359874785601,
    0.00679162150713708,
];

const UNWEIGHTED_IMPULSE: [f64; 64] = [
    0.0003306520826380572,
    0.002349267291536271,
    0.008067815152316964,
    0.018414017196717463,
    0.032399374959550115,
    0.047925035140611506,
    0.06277835102769957,
    0.07516289801577375,
    0.08391408062086234,
    0.08851713728890495,
    0.08901382792359153,
    0.0858586280401175,
    0.07976476323561393,
    0.07156455313810306,
    0.06209677882863236,
    0.052125530765451636,
    0.04228959335156531,
    0.03307825377310554,
    0.024827916136096174,
    0.017733561552121864,
    0.011869510006151277,
    0.007214786340142849,
    0.0036794276392667696,
    0.0011291219880273133,
    -0.0005934711300699471,
    -0.0016515623225743768,
    -0.0022014523754712505,
    -0.002383899686515305,
    -0.0023191175860540827,
    -0.002104733269462886,
    -0.0018159946293342796,
    -0.0015075415447796925,
    -0.0012161373927221466,
    -0.0009638622716506809,
    -0.0007613841616474888,
    -0.0006110353231324754,
    -0.0005095203759309616,
    -0.0004501650930569471,
    -0.00042467926948643476,
    -0.0004244534673807568,
    -0.0004414397704485703,
    -0.0004686834692993734,
    -0.0005005787346732863,
    -0.0005329196769229671,
    -0.0005628113385040571,
    -0.0005884953261708654,
    -0.000609133711618495,
    -0.0006245838086817565,
    -0.0006351863493604993,
    -0.0006415809502214879,
    -0.0006445558194286521,
    -0.0006449334232511954,
    -0.0006434901829162836,
    -0.0006409059923245035,
    -0.0006377381758875984,
    -0.0006344141774092732,
    -0.000631237536173263,
    -0.0006284023479021484,
    -0.0006260122483171406,
    -0.0006241008594862181,
    -0.0006226515071512079,
    -0.0006216147885213794,
    -0.0006209232108717975,
    -0.0006205026199816322,
];

const WOW_IMPULSE: [f64; 64] = [
    3.386435216458736e-10,
    2.700051169500182e-09,
    1.0754851804908736e-08,
    2.9428972936853753e-08,
    6.385276812746013e-08,
    1.1901523710904794e-07,
    1.997660996538517e-07,
    3.1081784937301685e-07,
    4.567477875696699e-07,
    6.420000372705694e-07,
    8.708875375605509e-07,
    1.1475940183436857e-06,
    1.4761759556547703e-06,
    1.860564507644466e-06,
    2.3045674313610982e-06,
    2.8118709804518238e-06,
    3.3860417839055527e-06,
    4.030528705959713e-06,
    4.748664687292606e-06,
    5.54366856762282e-06,
    6.418646889836789e-06,
    7.376595685765327e-06,
    8.420402243729572e-06,
    9.552846857976512e-06,
    1.0776604560123852e-05,
    1.2094246832733743e-05,
    1.3508243305134444e-05,
    1.5020963431608755e-05,
    1.663467815206764e-05,
    1.8351561535327122e-05,
    2.0173692405106264e-05,
    2.210305594886352e-05,
    2.4141545309588647e-05,
    2.6290963160666722e-05,
    2.8553023263930698e-05,
    3.092935201101844e-05,
    3.3421489948149804e-05,
    3.603089328443907e-05,
    3.875893538385757e-05,
    4.1606908240961004e-05,
    4.457602394049557e-05,
    4.7667416100996774e-05,
    5.088214130249415e-05,
    5.4221180498435e-05,
    5.768544041193973e-05,
    6.127575491650105e-05,
    6.499288640123897e-05,
    6.883752712082285e-05,
    7.281030053017199e-05,
    7.691176260404485e-05,
    8.1142403141628e-05,
    8.550264705623387e-05,
    8.999285565021758e-05,
    9.461332787522144e-05,
    9.936430157785612e-05,
    0.00010424595473092668,
    0.00010925840665031156,
    0.00011440171919760179,
    0.00011967589796860789,
    0.0001250808934678407,
    0.0001306166022690731,
    0.00013628286816208773,
    0.00014207948328571695,
    0.00014800618924727956,
];

const FLUTTER_IMPULSE: [f64; 64] = [
    0.0002980764585582655,
    0.0021238173791953852,
    0.007319753369118377,
    0.01677822665205037,
    0.029661292945138373,
    0.044089138893848134,
    0.058026483422902404,
    0.0697725221993864,
    0.07817671137825342,
    0.08267658780379793,
    0.08323055563939653,
    0.08019857947131542,
    0.07420716457654689,
    0.0660217962874321,
    0.05643990123651517,
    0.04621002100026142,
    0.035977831001808167,
    0.02625645542609129,
    0.01741679908374448,
    0.009692954813654193,
    0.003197817516203868,
    -0.002055430850252604,
    -0.006129522097027971,
    -0.009139680509841031,
    -0.011232431789707266,
    -0.012567749831330877,
    -0.013305036376675579,
    -0.013592960918635481,
    -0.013562860934929491,
    -0.013325200072566734,
    -0.012968482787594411,
    -0.012560004569661299,
    -0.012147854268073934,
    -0.011763658609803357,
    -0.011425651575270878,
    -0.011141749458297304,
    -0.010912406471324234,
    -0.01073310930510853,
    -0.010596438580270621,
    -0.01049367933800228,
    -0.010416001954782025,
    -0.01035526058075574,
    -0.010304470485505084,
    -0.010258030913155216,
    -0.010211758562884372,
    -0.010162790789841525,
    -0.01010940892667013,
    -0.010050822257067828,
    -0.009986943260220467,
    -0.009918175573267376,
    -0.009845228171994664,
    -0.009768962785391893,
    -0.009690276586552556,
    -0.009610018655663136,
    -0.009528936419891795,
    -0.009447647023748743,
    -0.009366628141614711,
    -0.009286222889722872,
    -0.009206654029388854,
    -0.009128043409933714,
    -0.009050433446779114,
    -0.008973808270337155,
    -0.00889811294866087,
    -0.008823269842192217,
];

/// Collect the first `len` impulse-response values of a cascade.
fn impulse_response<const LEN: usize>(filter: &mut BiquadCascade<LEN>, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| filter.process(if i == 0 { 1.0 } else { 0.0 }))
        .collect()
}

/// Compare two buffers sample-by-sample with ULP tolerance.
fn assert_buffers_match(name: &str, actual: &[f64], expected: &[f64], max_ulps: u64) {
    assert_eq!(actual.len(), expected.len(), "{name}: length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a == 0.0 && e == 0.0 {
            continue;
        }
        let diff_ulps = (a.to_bits() as i64 - e.to_bits() as i64).unsigned_abs();
        assert!(
            diff_ulps <= max_ulps,
            "{name}: sample {i} mismatch: got={a:e} expected={e:e} (ulps={diff_ulps}, max={max_ulps})"
        );
    }
}

const MAX_ULPS: u64 = 2;

#[test]
fn tone_bandpass_matches_reference() {
    let mut f = bank::tone_bandpass();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("tone_bandpass", &ir, &TONE_BANDPASS_IMPULSE, MAX_ULPS);
}

#[test]
fn din_matches_reference() {
    let mut f = bank::din();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("din", &ir, &DIN_IMPULSE, MAX_ULPS);
}

#[test]
fn unweighted_matches_reference() {
    let mut f = bank::unweighted();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("unweighted", &ir, &UNWEIGHTED_IMPULSE, MAX_ULPS);
}

#[test]
fn wow_matches_reference() {
    let mut f = bank::wow();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("wow", &ir, &WOW_IMPULSE, MAX_ULPS);
}

#[test]
fn flutter_matches_reference() {
    let mut f = bank::flutter();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("flutter", &ir, &FLUTTER_IMPULSE, MAX_ULPS);
}

#[test]
fn reset_reproduces_the_reference_response() {
    let mut f = bank::tone_bandpass();
    // Pollute the state with a long non-trivial signal first.
    for i in 0..10_000 {
        f.process((i as f64 * 0.21).sin() * 12_000.0);
    }
    f.reset();
    let ir = impulse_response(&mut f, 64);
    assert_buffers_match("tone_bandpass after reset", &ir, &TONE_BANDPASS_IMPULSE, MAX_ULPS);
}
