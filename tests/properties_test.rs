//! Property declarations built through the factory traits.

use cssmodel::prelude::*;
use cssmodel::properties::{
    AnimationDirection, AspectRatio, AspectRatioValue, BorderTopStyle, Declaration,
    DeclarationBlock, Global, Height, MarginTop, Opacity, Property, Rotate, Size,
    TransitionDuration, Width,
};

#[test]
fn test_block_of_mixed_properties() {
    let block = DeclarationBlock::new()
        .with(Width::px(320))
        .with(Height(Size::from(Calc::new("100vh - 4rem"))))
        .with(MarginTop::zero())
        .with(BorderTopStyle::solid())
        .with(Opacity::percent(50))
        .with(Rotate::turn(0.25))
        .with(TransitionDuration::ms(200))
        .with(AspectRatio(AspectRatioValue::from(Ratio::standard())))
        .with(AnimationDirection::Alternate);

    assert_eq!(
        block.to_string(),
        "width: 320px; height: calc(100vh - 4rem); margin-top: 0px; \
         border-top-style: solid; opacity: 50%; rotate: 0.25turn; \
         transition-duration: 200ms; aspect-ratio: 4 / 3; \
         animation-direction: alternate;"
    );
}

#[test]
fn test_global_keywords_on_every_property() {
    for global in Global::ALL.iter().copied() {
        let keyword = global.as_str();
        assert_eq!(Width::from(global).to_string(), keyword);
        assert_eq!(Opacity::from(global).to_string(), keyword);
        assert_eq!(AnimationDirection::from(global).to_string(), keyword);
    }
}

#[test]
fn test_important() {
    let declaration = Width::percent(100).declaration().important();
    assert_eq!(declaration.to_string(), "width: 100% !important;");
    assert_eq!(declaration.property, Width::NAME);
}

#[test]
fn test_declaration_from_any_value() {
    let declaration = Declaration::new("min-width", &LengthPercentage::rem(2));
    assert_eq!(declaration.to_string(), "min-width: 2rem;");
    let declaration = Declaration::new("width", &Calc::min("50%, 30rem"));
    assert_eq!(declaration.to_string(), "width: min(50%, 30rem);");
}

#[test]
fn test_same_vocabulary_across_types() {
    fn widths<T: LengthConvertible + PercentageConvertible + ToCss>() -> Vec<String> {
        vec![T::px(1).to_css_string(), T::percent(2).to_css_string(), T::zero().to_css_string()]
    }

    let expected = ["1px", "2%", "0px"];
    assert_eq!(widths::<LengthPercentage>(), expected);
    assert_eq!(widths::<Width>(), expected);
    assert_eq!(widths::<MarginTop>(), expected);
}
