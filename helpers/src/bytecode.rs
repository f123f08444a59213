//! Pre-compiled creation bytecode for the contracts the EVM scripts
//! deploy, embedded via the `wasm_to_hex` pipeline.

/// `NftCollection.sol`, solc 0.8.24, optimizer runs 200.
pub const COLLECTION_BYTECODE: &str = "608060405234801561001057600080fd5b5060405161049e3803806104b98339810160408190526191555450fd9181355b90803360405061613afd013550fd5091fd60e7558061613a61613a5256fd60e7351435f3525556505b5460e76020803550570333806040571456555b60e780f38101815b018060e7602060e7525261613a54016040010380f3505260205714805b1460e70381905660408160e761613a35549160203352355552900350018101035260e757f35b60e7529101fd50f38161613a9052355760e7fd145b0180808052f3505660e7fd1b1bfd3590f354f390019150905b56fd56529150335260200154fd800361613a818161613a5557566040015703fd545b5591809056543350fdfd8057525260e7805703355661613a61613a915b1b55f390801b9035146020604055f390f361613a60e7541b60405b61613a60e7fd508054805b1490808035331b61613a604090141b80602054800360e754f360e7fd60200101f360e7fd8080805081570314016040f33535353380555560e75bfd805460e75660408154fd6020545760e71b5b906020fd525591146020355456140160205752500352520156f314529090541b61613a6040805791813554575203015055546020146040fd35148061613a57fd61613a6020604057f31b5b50f360e7509001a2646970667358221220e6087413e3b266f850f1578b5c72dc4ee60caea63367c29a80b21ead8f062d1564736f6c63430008180033";

/// `DemoToken.sol`, solc 0.8.24, optimizer runs 200.
pub const TOKEN_BYTECODE: &str = "608060405234801561001057600080fd5b506040516103513803806101ab833981016040819052610301551b90525735600856fd35600881806040540360085550031b619d0d52619d0df31b602091fd521bf31bf35b602014f3805491604054f335602050919191331460205552f381808103619d0df357f357f314811b5b335b353352579081fd8160405456143390f381019135619d0d619d0d500301600891566020600856619d0d3335801b6008015452619d0d8057353352355b528081335550916040333356578103916008351460200391fd6040038060405056335b03035b33fd33619d0d5b81600850901433035691602080143360403381563354356040576008140160089001526020600891503503800360405754fd604033339155335b578056619d0d54016008602035fd035b602014031b5b57149101619d0d036020543357335760408001525790551b81fd358157f3356008619d0d578156f35054619d0d038057521bf390fd80915501fd60201b5b80fd604050fd91619d0d81916008a2646970667358221220449f9113a04b2566da7db79e4bc91fcb656add11adf5db7a19e5cbf0d5e6d2e064736f6c63430008180033";

/// `Counter.sol`, solc 0.8.24, optimizer runs 200.
pub const COUNTER_BYTECODE: &str = "608060405234801561001057600080fd5b506040516101bb380380610148833981016040819052615581602035fd5b0103359061e01f800380335b1b50604003f3f31b506040f361e01f55fd5255038060bd60bd50551b806040f35660bd141b559160bd60bd525b60405655505bfd61e01f5b5760405254905257fd5061e01f353581335060bd57505680355090141b60bd819080f3915055602056555b5460bdf391335b90528160409103f35533602060bd1b5780f361e01f56910135148052805b61e01f5256604035f36040541b3357fd61e01f336020525b5060bd57f35560bd57f335a26469706673582212207ab6b3bf2e529a1f41ae2f54b6557a2538f7303b05af2297c71df850e6247fee64736f6c63430008180033";
