//! Built-in Korean tables.
//!
//! Polarity values are limited to -2, -1, +1 and +2. Rarity weights are
//! hand-curated salience multipliers, not corpus statistics.

/// Base polarity of canonical word forms
pub(crate) const POLARITY: &[(&str, i8)] = &[
    // Strong positive
    ("최고다", 2),
    ("훌륭하다", 2),
    ("행복하다", 2),
    ("대박이다", 2),
    ("재미있다", 2),
    ("완벽하다", 2),
    ("멋지다", 2),
    ("환상적이다", 2),
    ("놀랍다", 2),
    ("탁월하다", 2),
    ("감격하다", 2),
    ("황홀하다", 2),
    ("대박", 2),
    ("최고", 2),
    ("끝내주다", 2),
    ("만족스럽다", 2),
    ("완벽", 2),
    ("멋", 2),
    // Positive
    ("좋다", 1),
    ("추천하다", 1),
    ("감동하다", 1),
    ("만족하다", 1),
    ("예쁘다", 1),
    ("빠르다", 1),
    ("친절하다", 1),
    ("성공하다", 1),
    ("귀엽다", 1),
    ("아름답다", 1),
    ("감사하다", 1),
    ("고맙다", 1),
    ("뛰어나다", 1),
    ("괜찮다", 1),
    ("감동", 1),
    ("유익하다", 1),
    ("신선하다", 1),
    ("산뜻하다", 1),
    ("추천", 1),
    ("만족", 1),
    ("좋", 1),
    ("훌륭", 1),
    ("감사", 1),
    ("고마움", 1),
    ("매력적이다", 1),
    ("매력", 1),
    ("흥미롭다", 1),
    ("유쾌하다", 1),
    ("즐겁다", 1),
    ("편하다", 1),
    ("편안하다", 1),
    ("쾌적하다", 1),
    ("상쾌하다", 1),
    ("든든하다", 1),
    ("유용하다", 1),
    ("효과적이다", 1),
    ("효율적이다", 1),
    ("탁월", 1),
    ("사랑스럽다", 1),
    ("매혹적이다", 1),
    ("인상적이다", 1),
    ("멋있다", 1),
    ("보람있다", 1),
    ("화려하다", 1),
    ("가뿐하다", 1),
    ("감개무량하다", 1),
    ("감미롭다", 1),
    ("감복하다", 1),
    ("경이롭다", 1),
    ("경쾌하다", 1),
    // Strong negative
    ("최악이다", -2),
    ("실망하다", -2),
    ("불친절하다", -2),
    ("끔찍하다", -2),
    ("혐오스럽다", -2),
    ("역겹다", -2),
    ("지루하다", -2),
    ("화나다", -2),
    ("격노하다", -2),
    ("격분하다", -2),
    ("고통스럽다", -2),
    ("처참하다", -2),
    ("최악", -2),
    ("형편없다", -2),
    ("엉망이다", -2),
    ("실패하다", -2),
    ("가관이다", -2),
    ("가슴아프다", -2),
    ("고독하다", -2),
    // Negative
    ("싫다", -1),
    ("나쁘다", -1),
    ("별로다", -1),
    ("느리다", -1),
    ("비싸다", -1),
    ("짜증나다", -1),
    ("아쉽다", -1),
    ("어렵다", -1),
    ("지저분하다", -1),
    ("불편하다", -1),
    ("답답하다", -1),
    ("걱정하다", -1),
    ("미안하다", -1),
    ("슬프다", -1),
    ("구리다", -1),
    ("별로", -1),
    ("불만스럽다", -1),
    ("실망", -1),
    ("후회하다", -1),
    ("안타깝다", -1),
    ("아쉬움", -1),
    ("불만", -1),
    ("짜증", -1),
    ("불쾌하다", -1),
    ("불만족스럽다", -1),
    ("불안하다", -1),
    ("우울하다", -1),
    ("피곤하다", -1),
    ("힘들다", -1),
    ("복잡하다", -1),
    ("애매하다", -1),
    ("모호하다", -1),
    ("의심스럽다", -1),
    ("불안", -1),
    ("불안감을", -1),
    ("가련하다", -1),
    ("가소롭다", -1),
    ("가엾다", -1),
    ("각박하다", -1),
    ("간절하다", -1),
    ("갑갑하다", -1),
    ("거북하다", -1),
    ("겁나다", -1),
    ("고달프다", -1),
];

/// Stems the tokenizer may leave unreduced, mapped to their canonical entry.
/// Order matters for prefix matching.
pub(crate) const STEMS: &[(&str, &str)] = &[
    ("만족스럽", "만족스럽다"),
    ("훌륭", "훌륭하다"),
    ("완벽", "완벽하다"),
    ("멋지", "멋지다"),
    ("추천", "추천하다"),
    ("만족", "만족하다"),
    ("감동", "감동하다"),
    ("실망", "실망하다"),
    ("후회", "후회하다"),
    ("좋", "좋다"),
    ("나쁘", "나쁘다"),
    ("싫", "싫다"),
    ("재미있", "재미있다"),
    ("지루", "지루하다"),
    ("매력적", "매력적이다"),
    ("매력", "매력적이다"),
    ("흥미롭", "흥미롭다"),
    ("유쾌", "유쾌하다"),
    ("즐겁", "즐겁다"),
    ("편", "편하다"),
    ("편안", "편안하다"),
    ("불편", "불편하다"),
    ("불쾌", "불쾌하다"),
    ("인상적", "인상적이다"),
    ("효과적", "효과적이다"),
    ("효율적", "효율적이다"),
];

/// Rarity weights; absent words weigh 1.0
pub(crate) const RARITY: &[(&str, f64)] = &[
    // Strong sentiment words
    ("최고다", 2.5),
    ("최악이다", 2.5),
    ("대박이다", 2.3),
    ("재미있다", 2.0),
    ("끔찍하다", 2.3),
    ("완벽하다", 2.2),
    ("실망하다", 2.0),
    ("감격하다", 2.2),
    ("대박", 2.3),
    ("최고", 2.5),
    ("최악", 2.5),
    // Mid-strength
    ("좋다", 1.5),
    ("나쁘다", 1.5),
    ("감동하다", 1.7),
    ("비싸다", 1.6),
    ("불친절하다", 1.8),
    ("만족하다", 1.6),
    ("감동", 1.7),
    ("매력적이다", 1.4),
    // Common sentiment words
    ("싫다", 1.3),
    ("빠르다", 1.2),
    ("느리다", 1.2),
    ("예쁘다", 1.3),
    ("별로", 1.4),
    ("아쉽다", 1.3),
    ("괜찮다", 1.2),
    // Neutral, frequent words
    ("영화", 0.8),
    ("서비스", 0.8),
    ("가격", 0.8),
    ("품질", 0.8),
    ("것", 0.5),
    ("같다", 0.5),
    ("이", 0.3),
    ("그", 0.3),
];

pub(crate) const NEGATORS: &[&str] = &["안", "않다", "못", "없다", "아니다", "말다", "아니"];

pub(crate) const STRONG_INTENSIFIERS: &[&str] = &[
    "완전", "진짜", "정말", "엄청", "너무", "매우", "굉장히", "아주", "겁나", "가장",
];

pub(crate) const MILD_INTENSIFIERS: &[&str] = &["꽤", "제법", "좀"];

pub(crate) const WEAKENERS: &[&str] = &["조금", "살짝", "약간", "다소", "그나마", "그런대로"];

/// Negative on their own; a nearby negator does not invert them
pub(crate) const NO_NEGATION_FLIP: &[&str] = &[
    "별로", "최악", "최악이다", "싫다", "나쁘다", "끔찍하다", "형편없다", "엉망이다", "구리다",
];

pub(crate) const TRANSITIONS: &[&str] = &["하지만", "그러나", "그런데", "근데", "but", "BUT"];
