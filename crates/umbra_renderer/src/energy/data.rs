//! Built-in multi-scatter energy tables.
//!
//! Generated file. Regenerate with `bake_energy --format rust`.

/// `[roughness, cos, albedo]`, sorted by roughness then cos.
#[rustfmt::skip]
pub(super) static DIRECTIONAL: [[f32; 3]; 1024] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0322580636, 1.0],
    [0.0, 0.0645161271, 1.0],
    [0.0, 0.0967741907, 1.0],
    [0.0, 0.129032254, 1.0],
    [0.0, 0.161290318, 1.0],
    [0.0, 0.193548381, 1.0],
    [0.0, 0.225806445, 1.0],
    [0.0, 0.258064508, 1.0],
    [0.0, 0.290322572, 1.0],
    [0.0, 0.322580636, 1.0],
    [0.0, 0.354838699, 1.0],
    [0.0, 0.387096763, 1.0],
    [0.0, 0.419354826, 1.0],
    [0.0, 0.45161289, 1.0],
    [0.0, 0.483870953, 1.0],
    [0.0, 0.516129017, 1.0],
    [0.0, 0.54838711, 1.0],
    [0.0, 0.580645144, 1.0],
    [0.0, 0.612903237, 1.0],
    [0.0, 0.645161271, 1.0],
    [0.0, 0.677419364, 1.0],
    [0.0, 0.709677398, 1.0],
    [0.0, 0.741935492, 1.0],
    [0.0, 0.774193525, 1.0],
    [0.0, 0.806451619, 1.0],
    [0.0, 0.838709652, 1.0],
    [0.0, 0.870967746, 1.0],
    [0.0, 0.90322578, 1.0],
    [0.0, 0.935483873, 1.0],
    [0.0, 0.967741907, 1.0],
    [0.0, 1.0, 1.0],
    [0.0322580636, 0.0, 0.980930924],
    [0.0322580636, 0.0322580636, 0.999487877],
    [0.0322580636, 0.0645161271, 0.999934137],
    [0.0322580636, 0.0967741907, 0.999971271],
    [0.0322580636, 0.129032254, 0.999967813],
    [0.0322580636, 0.161290318, 0.999989867],
    [0.0322580636, 0.193548381, 0.999992967],
    [0.0322580636, 0.225806445, 0.999994934],
    [0.0322580636, 0.258064508, 0.999996185],
    [0.0322580636, 0.290322572, 0.999997079],
    [0.0322580636, 0.322580636, 0.999997675],
    [0.0322580636, 0.354838699, 0.999998093],
    [0.0322580636, 0.387096763, 0.99999845],
    [0.0322580636, 0.419354826, 0.999998748],
    [0.0322580636, 0.45161289, 0.999998927],
    [0.0322580636, 0.483870953, 0.999999106],
    [0.0322580636, 0.516129017, 0.999999225],
    [0.0322580636, 0.54838711, 0.999999344],
    [0.0322580636, 0.580645144, 0.999999464],
    [0.0322580636, 0.612903237, 0.999999523],
    [0.0322580636, 0.645161271, 0.999999583],
    [0.0322580636, 0.677419364, 0.999999702],
    [0.0322580636, 0.709677398, 0.999999762],
    [0.0322580636, 0.741935492, 0.999999762],
    [0.0322580636, 0.774193525, 0.999999821],
    [0.0322580636, 0.806451619, 0.999999881],
    [0.0322580636, 0.838709652, 0.999999881],
    [0.0322580636, 0.870967746, 0.99999994],
    [0.0322580636, 0.90322578, 0.99999994],
    [0.0322580636, 0.935483873, 0.99999994],
    [0.0322580636, 0.967741907, 1.0],
    [0.0322580636, 1.0, 1.0],
    [0.0645161271, 0.0, 0.995151699],
    [0.0645161271, 0.0322580636, 0.990258574],
    [0.0645161271, 0.0645161271, 0.997258008],
    [0.0645161271, 0.0967741907, 0.999247551],
    [0.0645161271, 0.129032254, 0.999736786],
    [0.0645161271, 0.161290318, 0.999835193],
    [0.0645161271, 0.193548381, 0.999290347],
    [0.0645161271, 0.225806445, 0.999674499],
    [0.0645161271, 0.258064508, 0.999938786],
    [0.0645161271, 0.290322572, 0.999952674],
    [0.0645161271, 0.322580636, 0.999962509],
    [0.0645161271, 0.354838699, 0.999969721],
    [0.0645161271, 0.387096763, 0.999731123],
    [0.0645161271, 0.419354826, 0.999979615],
    [0.0645161271, 0.45161289, 0.999983013],
    [0.0645161271, 0.483870953, 0.999985754],
    [0.0645161271, 0.516129017, 0.999988079],
    [0.0645161271, 0.54838711, 0.999745786],
    [0.0645161271, 0.580645144, 0.999991357],
    [0.0645161271, 0.612903237, 0.999992788],
    [0.0645161271, 0.645161271, 0.99999392],
    [0.0645161271, 0.677419364, 0.999994874],
    [0.0645161271, 0.709677398, 0.999995708],
    [0.0645161271, 0.741935492, 0.999996424],
    [0.0645161271, 0.774193525, 0.999997079],
    [0.0645161271, 0.806451619, 0.999997675],
    [0.0645161271, 0.838709652, 0.999998152],
    [0.0645161271, 0.870967746, 0.999998629],
    [0.0645161271, 0.90322578, 0.999754906],
    [0.0645161271, 0.935483873, 0.999999404],
    [0.0645161271, 0.967741907, 0.999999702],
    [0.0645161271, 1.0, 1.0],
    [0.0967741907, 0.0, 0.997810721],
    [0.0967741907, 0.0322580636, 0.954537868],
    [0.0967741907, 0.0645161271, 0.987204254],
    [0.0967741907, 0.0967741907, 0.993659377],
    [0.0967741907, 0.129032254, 0.997235417],
    [0.0967741907, 0.161290318, 0.998094678],
    [0.0967741907, 0.193548381, 0.998913944],
    [0.0967741907, 0.225806445, 0.999277472],
    [0.0967741907, 0.258064508, 0.999189913],
    [0.0967741907, 0.290322572, 0.999508142],
    [0.0967741907, 0.322580636, 0.999455988],
    [0.0967741907, 0.354838699, 0.999299765],
    [0.0967741907, 0.387096763, 0.998894036],
    [0.0967741907, 0.419354826, 0.999376416],
    [0.0967741907, 0.45161289, 0.999425292],
    [0.0967741907, 0.483870953, 0.999925077],
    [0.0967741907, 0.516129017, 0.999937117],
    [0.0967741907, 0.54838711, 0.999948442],
    [0.0967741907, 0.580645144, 0.999956369],
    [0.0967741907, 0.612903237, 0.999963224],
    [0.0967741907, 0.645161271, 0.999724686],
    [0.0967741907, 0.677419364, 0.999973416],
    [0.0967741907, 0.709677398, 0.999975622],
    [0.0967741907, 0.741935492, 0.99973768],
    [0.0967741907, 0.774193525, 0.999741077],
    [0.0967741907, 0.806451619, 0.999988019],
    [0.0967741907, 0.838709652, 0.999990642],
    [0.0967741907, 0.870967746, 0.99999249],
    [0.0967741907, 0.90322578, 0.999994934],
    [0.0967741907, 0.935483873, 0.999996781],
    [0.0967741907, 0.967741907, 0.99999845],
    [0.0967741907, 1.0, 0.9997558],
    [0.129032254, 0.0, 0.998796582],
    [0.129032254, 0.0322580636, 0.911334753],
    [0.129032254, 0.0645161271, 0.96243763],
    [0.129032254, 0.0967741907, 0.981524348],
    [0.129032254, 0.129032254, 0.989662647],
    [0.129032254, 0.161290318, 0.994189382],
    [0.129032254, 0.193548381, 0.994740129],
    [0.129032254, 0.225806445, 0.997587562],
    [0.129032254, 0.258064508, 0.996869743],
    [0.129032254, 0.290322572, 0.998900712],
    [0.129032254, 0.322580636, 0.998862207],
    [0.129032254, 0.354838699, 0.999426425],
    [0.129032254, 0.387096763, 0.998822689],
    [0.129032254, 0.419354826, 0.998813927],
    [0.129032254, 0.45161289, 0.999710917],
    [0.129032254, 0.483870953, 0.999446869],
    [0.129032254, 0.516129017, 0.998583019],
    [0.129032254, 0.54838711, 0.999752283],
    [0.129032254, 0.580645144, 0.998882711],
    [0.129032254, 0.612903237, 0.999880552],
    [0.129032254, 0.645161271, 0.999896824],
    [0.129032254, 0.677419364, 0.999424279],
    [0.129032254, 0.709677398, 0.999920309],
    [0.129032254, 0.741935492, 0.999453843],
    [0.129032254, 0.774193525, 0.99946332],
    [0.129032254, 0.806451619, 0.999717116],
    [0.129032254, 0.838709652, 0.99948138],
    [0.129032254, 0.870967746, 0.999311626],
    [0.129032254, 0.90322578, 0.999982774],
    [0.129032254, 0.935483873, 0.999744892],
    [0.129032254, 0.967741907, 0.999749959],
    [0.129032254, 1.0, 0.999754727],
    [0.161290318, 0.0, 0.999192536],
    [0.161290318, 0.0322580636, 0.891393065],
    [0.161290318, 0.0645161271, 0.928371608],
    [0.161290318, 0.0967741907, 0.960186362],
    [0.161290318, 0.129032254, 0.975684881],
    [0.161290318, 0.161290318, 0.983458698],
    [0.161290318, 0.193548381, 0.988686621],
    [0.161290318, 0.225806445, 0.990684092],
    [0.161290318, 0.258064508, 0.993789852],
    [0.161290318, 0.290322572, 0.995311677],
    [0.161290318, 0.322580636, 0.99632895],
    [0.161290318, 0.354838699, 0.996187031],
    [0.161290318, 0.387096763, 0.996770322],
    [0.161290318, 0.419354826, 0.998169899],
    [0.161290318, 0.45161289, 0.996525407],
    [0.161290318, 0.483870953, 0.99845016],
    [0.161290318, 0.516129017, 0.998456597],
    [0.161290318, 0.54838711, 0.998924553],
    [0.161290318, 0.580645144, 0.998369694],
    [0.161290318, 0.612903237, 0.998470187],
    [0.161290318, 0.645161271, 0.999013126],
    [0.161290318, 0.677419364, 0.999045253],
    [0.161290318, 0.709677398, 0.99883616],
    [0.161290318, 0.741935492, 0.999299347],
    [0.161290318, 0.774193525, 0.999353468],
    [0.161290318, 0.806451619, 0.999409735],
    [0.161290318, 0.838709652, 0.999186575],
    [0.161290318, 0.870967746, 0.998717129],
    [0.161290318, 0.90322578, 0.999467194],
    [0.161290318, 0.935483873, 0.999416649],
    [0.161290318, 0.967741907, 0.99998486],
    [0.161290318, 1.0, 0.999484181],
    [0.193548381, 0.0, 0.999285161],
    [0.193548381, 0.0322580636, 0.894532859],
    [0.193548381, 0.0645161271, 0.90206027],
    [0.193548381, 0.0967741907, 0.931748509],
    [0.193548381, 0.129032254, 0.953359127],
    [0.193548381, 0.161290318, 0.967886388],
    [0.193548381, 0.193548381, 0.977515996],
    [0.193548381, 0.225806445, 0.981927454],
    [0.193548381, 0.258064508, 0.985654354],
    [0.193548381, 0.290322572, 0.989041209],
    [0.193548381, 0.322580636, 0.991117537],
    [0.193548381, 0.354838699, 0.991838515],
    [0.193548381, 0.387096763, 0.993290722],
    [0.193548381, 0.419354826, 0.993753076],
    [0.193548381, 0.45161289, 0.995221496],
    [0.193548381, 0.483870953, 0.997000992],
    [0.193548381, 0.516129017, 0.996206999],
    [0.193548381, 0.54838711, 0.995942593],
    [0.193548381, 0.580645144, 0.996229529],
    [0.193548381, 0.612903237, 0.997596443],
    [0.193548381, 0.645161271, 0.998106778],
    [0.193548381, 0.677419364, 0.997045875],
    [0.193548381, 0.709677398, 0.999069571],
    [0.193548381, 0.741935492, 0.997454166],
    [0.193548381, 0.774193525, 0.99823755],
    [0.193548381, 0.806451619, 0.997562647],
    [0.193548381, 0.838709652, 0.997712255],
    [0.193548381, 0.870967746, 0.998622358],
    [0.193548381, 0.90322578, 0.997083724],
    [0.193548381, 0.935483873, 0.998706996],
    [0.193548381, 0.967741907, 0.998719752],
    [0.193548381, 1.0, 0.99833113],
    [0.225806445, 0.0, 0.999549806],
    [0.225806445, 0.0322580636, 0.904987872],
    [0.225806445, 0.0645161271, 0.889691651],
    [0.225806445, 0.0967741907, 0.908309877],
    [0.225806445, 0.129032254, 0.928872526],
    [0.225806445, 0.161290318, 0.946287274],
    [0.225806445, 0.193548381, 0.959838629],
    [0.225806445, 0.225806445, 0.968377829],
    [0.225806445, 0.258064508, 0.974217951],
    [0.225806445, 0.290322572, 0.979569733],
    [0.225806445, 0.322580636, 0.983272374],
    [0.225806445, 0.354838699, 0.98539412],
    [0.225806445, 0.387096763, 0.987746835],
    [0.225806445, 0.419354826, 0.988798559],
    [0.225806445, 0.45161289, 0.990501106],
    [0.225806445, 0.483870953, 0.991016328],
    [0.225806445, 0.516129017, 0.992832839],
    [0.225806445, 0.54838711, 0.993696868],
    [0.225806445, 0.580645144, 0.994000375],
    [0.225806445, 0.612903237, 0.994887114],
    [0.225806445, 0.645161271, 0.995657682],
    [0.225806445, 0.677419364, 0.99550128],
    [0.225806445, 0.709677398, 0.994642377],
    [0.225806445, 0.741935492, 0.995233059],
    [0.225806445, 0.774193525, 0.994891584],
    [0.225806445, 0.806451619, 0.995564997],
    [0.225806445, 0.838709652, 0.996904135],
    [0.225806445, 0.870967746, 0.996027172],
    [0.225806445, 0.90322578, 0.997488558],
    [0.225806445, 0.935483873, 0.99742502],
    [0.225806445, 0.967741907, 0.99792093],
    [0.225806445, 1.0, 0.997417092],
    [0.258064508, 0.0, 0.999675214],
    [0.258064508, 0.0322580636, 0.917028427],
    [0.258064508, 0.0645161271, 0.888192177],
    [0.258064508, 0.0967741907, 0.891532898],
    [0.258064508, 0.129032254, 0.907583714],
    [0.258064508, 0.161290318, 0.924142718],
    [0.258064508, 0.193548381, 0.938154757],
    [0.258064508, 0.225806445, 0.949909091],
    [0.258064508, 0.258064508, 0.958443105],
    [0.258064508, 0.290322572, 0.966056705],
    [0.258064508, 0.322580636, 0.972608685],
    [0.258064508, 0.354838699, 0.974882007],
    [0.258064508, 0.387096763, 0.977931499],
    [0.258064508, 0.419354826, 0.981794298],
    [0.258064508, 0.45161289, 0.984545112],
    [0.258064508, 0.483870953, 0.986606836],
    [0.258064508, 0.516129017, 0.987495005],
    [0.258064508, 0.54838711, 0.987647593],
    [0.258064508, 0.580645144, 0.990024805],
    [0.258064508, 0.612903237, 0.991134822],
    [0.258064508, 0.645161271, 0.989902556],
    [0.258064508, 0.677419364, 0.991328716],
    [0.258064508, 0.709677398, 0.993561149],
    [0.258064508, 0.741935492, 0.993449032],
    [0.258064508, 0.774193525, 0.992598116],
    [0.258064508, 0.806451619, 0.992671728],
    [0.258064508, 0.838709652, 0.994489789],
    [0.258064508, 0.870967746, 0.993163764],
    [0.258064508, 0.90322578, 0.994996786],
    [0.258064508, 0.935483873, 0.995297492],
    [0.258064508, 0.967741907, 0.995446205],
    [0.258064508, 1.0, 0.993374765],
    [0.290322572, 0.0, 0.999690175],
    [0.290322572, 0.0322580636, 0.92802161],
    [0.290322572, 0.0645161271, 0.892192483],
    [0.290322572, 0.0967741907, 0.88614893],
    [0.290322572, 0.129032254, 0.892633498],
    [0.290322572, 0.161290318, 0.904452443],
    [0.290322572, 0.193548381, 0.917664886],
    [0.290322572, 0.225806445, 0.929264009],
    [0.290322572, 0.258064508, 0.940805137],
    [0.290322572, 0.290322572, 0.949459314],
    [0.290322572, 0.322580636, 0.95607996],
    [0.290322572, 0.354838699, 0.963126123],
    [0.290322572, 0.387096763, 0.967219651],
    [0.290322572, 0.419354826, 0.9710778],
    [0.290322572, 0.45161289, 0.974603176],
    [0.290322572, 0.483870953, 0.977040887],
    [0.290322572, 0.516129017, 0.979703486],
    [0.290322572, 0.54838711, 0.980615139],
    [0.290322572, 0.580645144, 0.981993556],
    [0.290322572, 0.612903237, 0.984287798],
    [0.290322572, 0.645161271, 0.985140622],
    [0.290322572, 0.677419364, 0.986907661],
    [0.290322572, 0.709677398, 0.986830235],
    [0.290322572, 0.741935492, 0.988355517],
    [0.290322572, 0.774193525, 0.989412904],
    [0.290322572, 0.806451619, 0.98888427],
    [0.290322572, 0.838709652, 0.989152551],
    [0.290322572, 0.870967746, 0.990237415],
    [0.290322572, 0.90322578, 0.989305019],
    [0.290322572, 0.935483873, 0.991250515],
    [0.290322572, 0.967741907, 0.992917836],
    [0.290322572, 1.0, 0.991773844],
    [0.322580636, 0.0, 0.999715626],
    [0.322580636, 0.0322580636, 0.937261045],
    [0.322580636, 0.0645161271, 0.89915657],
    [0.322580636, 0.0967741907, 0.883870721],
    [0.322580636, 0.129032254, 0.882907748],
    [0.322580636, 0.161290318, 0.888829589],
    [0.322580636, 0.193548381, 0.899169624],
    [0.322580636, 0.225806445, 0.909332931],
    [0.322580636, 0.258064508, 0.920169592],
    [0.322580636, 0.290322572, 0.930396199],
    [0.322580636, 0.322580636, 0.938294709],
    [0.322580636, 0.354838699, 0.945862234],
    [0.322580636, 0.387096763, 0.951406717],
    [0.322580636, 0.419354826, 0.957755625],
    [0.322580636, 0.45161289, 0.960584998],
    [0.322580636, 0.483870953, 0.963741362],
    [0.322580636, 0.516129017, 0.968890309],
    [0.322580636, 0.54838711, 0.971330047],
    [0.322580636, 0.580645144, 0.973750591],
    [0.322580636, 0.612903237, 0.975250542],
    [0.322580636, 0.645161271, 0.977160215],
    [0.322580636, 0.677419364, 0.978909671],
    [0.322580636, 0.709677398, 0.979179561],
    [0.322580636, 0.741935492, 0.980841696],
    [0.322580636, 0.774193525, 0.982720375],
    [0.322580636, 0.806451619, 0.983161747],
    [0.322580636, 0.838709652, 0.984345019],
    [0.322580636, 0.870967746, 0.985408127],
    [0.322580636, 0.90322578, 0.985763669],
    [0.322580636, 0.935483873, 0.986708581],
    [0.322580636, 0.967741907, 0.98818934],
    [0.322580636, 1.0, 0.985608816],
    [0.354838699, 0.0, 0.999771476],
    [0.354838699, 0.0322580636, 0.943087459],
    [0.354838699, 0.0645161271, 0.907470405],
    [0.354838699, 0.0967741907, 0.885728359],
    [0.354838699, 0.129032254, 0.878633797],
    [0.354838699, 0.161290318, 0.878457308],
    [0.354838699, 0.193548381, 0.884102464],
    [0.354838699, 0.225806445, 0.892309189],
    [0.354838699, 0.258064508, 0.901392996],
    [0.354838699, 0.290322572, 0.910047472],
    [0.354838699, 0.322580636, 0.918450892],
    [0.354838699, 0.354838699, 0.925760686],
    [0.354838699, 0.387096763, 0.933061123],
    [0.354838699, 0.419354826, 0.939998984],
    [0.354838699, 0.45161289, 0.945089638],
    [0.354838699, 0.483870953, 0.949866116],
    [0.354838699, 0.516129017, 0.954396486],
    [0.354838699, 0.54838711, 0.958005011],
    [0.354838699, 0.580645144, 0.960552871],
    [0.354838699, 0.612903237, 0.963525951],
    [0.354838699, 0.645161271, 0.966380775],
    [0.354838699, 0.677419364, 0.968167663],
    [0.354838699, 0.709677398, 0.970713198],
    [0.354838699, 0.741935492, 0.971879661],
    [0.354838699, 0.774193525, 0.973749518],
    [0.354838699, 0.806451619, 0.974917829],
    [0.354838699, 0.838709652, 0.976567149],
    [0.354838699, 0.870967746, 0.977960467],
    [0.354838699, 0.90322578, 0.978169441],
    [0.354838699, 0.935483873, 0.97900188],
    [0.354838699, 0.967741907, 0.980603337],
    [0.354838699, 1.0, 0.980532229],
    [0.387096763, 0.0, 0.999612033],
    [0.387096763, 0.0322580636, 0.948049307],
    [0.387096763, 0.0645161271, 0.911773324],
    [0.387096763, 0.0967741907, 0.888519645],
    [0.387096763, 0.129032254, 0.876655161],
    [0.387096763, 0.161290318, 0.872206867],
    [0.387096763, 0.193548381, 0.873624623],
    [0.387096763, 0.225806445, 0.877487063],
    [0.387096763, 0.258064508, 0.883968532],
    [0.387096763, 0.290322572, 0.89150995],
    [0.387096763, 0.322580636, 0.898738801],
    [0.387096763, 0.354838699, 0.906519294],
    [0.387096763, 0.387096763, 0.913410008],
    [0.387096763, 0.419354826, 0.919836164],
    [0.387096763, 0.45161289, 0.926009238],
    [0.387096763, 0.483870953, 0.932208121],
    [0.387096763, 0.516129017, 0.937657595],
    [0.387096763, 0.54838711, 0.941327989],
    [0.387096763, 0.580645144, 0.944971263],
    [0.387096763, 0.612903237, 0.949746311],
    [0.387096763, 0.645161271, 0.952762306],
    [0.387096763, 0.677419364, 0.953910172],
    [0.387096763, 0.709677398, 0.95821321],
    [0.387096763, 0.741935492, 0.959417701],
    [0.387096763, 0.774193525, 0.961313069],
    [0.387096763, 0.806451619, 0.964115262],
    [0.387096763, 0.838709652, 0.966507971],
    [0.387096763, 0.870967746, 0.967367291],
    [0.387096763, 0.90322578, 0.968563437],
    [0.387096763, 0.935483873, 0.969483376],
    [0.387096763, 0.967741907, 0.971103489],
    [0.387096763, 1.0, 0.97323066],
    [0.419354826, 0.0, 0.999767959],
    [0.419354826, 0.0322580636, 0.950717449],
    [0.419354826, 0.0645161271, 0.916090131],
    [0.419354826, 0.0967741907, 0.891377389],
    [0.419354826, 0.129032254, 0.876546323],
    [0.419354826, 0.161290318, 0.867930651],
    [0.419354826, 0.193548381, 0.86496067],
    [0.419354826, 0.225806445, 0.865898609],
    [0.419354826, 0.258064508, 0.869003117],
    [0.419354826, 0.290322572, 0.874209344],
    [0.419354826, 0.322580636, 0.880072594],
    [0.419354826, 0.354838699, 0.886128247],
    [0.419354826, 0.387096763, 0.89298898],
    [0.419354826, 0.419354826, 0.899015784],
    [0.419354826, 0.45161289, 0.905197024],
    [0.419354826, 0.483870953, 0.910924137],
    [0.419354826, 0.516129017, 0.917696178],
    [0.419354826, 0.54838711, 0.921451271],
    [0.419354826, 0.580645144, 0.926252604],
    [0.419354826, 0.612903237, 0.930940032],
    [0.419354826, 0.645161271, 0.934726119],
    [0.419354826, 0.677419364, 0.937908113],
    [0.419354826, 0.709677398, 0.941414356],
    [0.419354826, 0.741935492, 0.944478333],
    [0.419354826, 0.774193525, 0.946938932],
    [0.419354826, 0.806451619, 0.948883712],
    [0.419354826, 0.838709652, 0.951142371],
    [0.419354826, 0.870967746, 0.953999162],
    [0.419354826, 0.90322578, 0.954868257],
    [0.419354826, 0.935483873, 0.958079875],
    [0.419354826, 0.967741907, 0.958847404],
    [0.419354826, 1.0, 0.960571051],
    [0.45161289, 0.0, 0.999760687],
    [0.45161289, 0.0322580636, 0.952050865],
    [0.45161289, 0.0645161271, 0.918230474],
    [0.45161289, 0.0967741907, 0.893390656],
    [0.45161289, 0.129032254, 0.876706541],
    [0.45161289, 0.161290318, 0.86420238],
    [0.45161289, 0.193548381, 0.857774377],
    [0.45161289, 0.225806445, 0.855468094],
    [0.45161289, 0.258064508, 0.855859756],
    [0.45161289, 0.290322572, 0.858651459],
    [0.45161289, 0.322580636, 0.862550914],
    [0.45161289, 0.354838699, 0.867273688],
    [0.45161289, 0.387096763, 0.872150183],
    [0.45161289, 0.419354826, 0.878466725],
    [0.45161289, 0.45161289, 0.884259999],
    [0.45161289, 0.483870953, 0.88996464],
    [0.45161289, 0.516129017, 0.894259751],
    [0.45161289, 0.54838711, 0.900362968],
    [0.45161289, 0.580645144, 0.905204833],
    [0.45161289, 0.612903237, 0.909591794],
    [0.45161289, 0.645161271, 0.91428262],
    [0.45161289, 0.677419364, 0.917665899],
    [0.45161289, 0.709677398, 0.92123425],
    [0.45161289, 0.741935492, 0.925359905],
    [0.45161289, 0.774193525, 0.928651989],
    [0.45161289, 0.806451619, 0.930885673],
    [0.45161289, 0.838709652, 0.93503052],
    [0.45161289, 0.870967746, 0.937098444],
    [0.45161289, 0.90322578, 0.939194441],
    [0.45161289, 0.935483873, 0.941580534],
    [0.45161289, 0.967741907, 0.944292605],
    [0.45161289, 1.0, 0.945248902],
    [0.483870953, 0.0, 0.999734819],
    [0.483870953, 0.0322580636, 0.952288032],
    [0.483870953, 0.0645161271, 0.91916132],
    [0.483870953, 0.0967741907, 0.894412339],
    [0.483870953, 0.129032254, 0.874791086],
    [0.483870953, 0.161290318, 0.861349881],
    [0.483870953, 0.193548381, 0.852248311],
    [0.483870953, 0.225806445, 0.846840858],
    [0.483870953, 0.258064508, 0.845144391],
    [0.483870953, 0.290322572, 0.844234109],
    [0.483870953, 0.322580636, 0.845698953],
    [0.483870953, 0.354838699, 0.848807216],
    [0.483870953, 0.387096763, 0.852899015],
    [0.483870953, 0.419354826, 0.85730356],
    [0.483870953, 0.45161289, 0.861128807],
    [0.483870953, 0.483870953, 0.867204547],
    [0.483870953, 0.516129017, 0.871273577],
    [0.483870953, 0.54838711, 0.876422226],
    [0.483870953, 0.580645144, 0.88101238],
    [0.483870953, 0.612903237, 0.886623383],
    [0.483870953, 0.645161271, 0.891112387],
    [0.483870953, 0.677419364, 0.893562257],
    [0.483870953, 0.709677398, 0.899461329],
    [0.483870953, 0.741935492, 0.903146505],
    [0.483870953, 0.774193525, 0.906559825],
    [0.483870953, 0.806451619, 0.911034226],
    [0.483870953, 0.838709652, 0.913611948],
    [0.483870953, 0.870967746, 0.916143596],
    [0.483870953, 0.90322578, 0.919123054],
    [0.483870953, 0.935483873, 0.921667337],
    [0.483870953, 0.967741907, 0.924654722],
    [0.483870953, 1.0, 0.926745415],
    [0.516129017, 0.0, 0.999800742],
    [0.516129017, 0.0322580636, 0.952415109],
    [0.516129017, 0.0645161271, 0.918733835],
    [0.516129017, 0.0967741907, 0.893094778],
    [0.516129017, 0.129032254, 0.873005927],
    [0.516129017, 0.161290318, 0.858063638],
    [0.516129017, 0.193548381, 0.847140431],
    [0.516129017, 0.225806445, 0.838944435],
    [0.516129017, 0.258064508, 0.834428906],
    [0.516129017, 0.290322572, 0.831274927],
    [0.516129017, 0.322580636, 0.830840468],
    [0.516129017, 0.354838699, 0.831748009],
    [0.516129017, 0.387096763, 0.833692312],
    [0.516129017, 0.419354826, 0.836602628],
    [0.516129017, 0.45161289, 0.839847267],
    [0.516129017, 0.483870953, 0.843032777],
    [0.516129017, 0.516129017, 0.847392619],
    [0.516129017, 0.54838711, 0.851654828],
    [0.516129017, 0.580645144, 0.855709016],
    [0.516129017, 0.612903237, 0.860355318],
    [0.516129017, 0.645161271, 0.865005612],
    [0.516129017, 0.677419364, 0.869202256],
    [0.516129017, 0.709677398, 0.873057663],
    [0.516129017, 0.741935492, 0.877008617],
    [0.516129017, 0.774193525, 0.881343484],
    [0.516129017, 0.806451619, 0.884869277],
    [0.516129017, 0.838709652, 0.88886112],
    [0.516129017, 0.870967746, 0.891824067],
    [0.516129017, 0.90322578, 0.895470738],
    [0.516129017, 0.935483873, 0.89948833],
    [0.516129017, 0.967741907, 0.9009009],
    [0.516129017, 1.0, 0.904207647],
    [0.54838711, 0.0, 0.999768913],
    [0.54838711, 0.0322580636, 0.950533867],
    [0.54838711, 0.0645161271, 0.917259514],
    [0.54838711, 0.0967741907, 0.891078234],
    [0.54838711, 0.129032254, 0.870055735],
    [0.54838711, 0.161290318, 0.85342443],
    [0.54838711, 0.193548381, 0.840463042],
    [0.54838711, 0.225806445, 0.830890477],
    [0.54838711, 0.258064508, 0.823697567],
    [0.54838711, 0.290322572, 0.818894625],
    [0.54838711, 0.322580636, 0.815933049],
    [0.54838711, 0.354838699, 0.81436795],
    [0.54838711, 0.387096763, 0.814527869],
    [0.54838711, 0.419354826, 0.815219402],
    [0.54838711, 0.45161289, 0.817253172],
    [0.54838711, 0.483870953, 0.819795966],
    [0.54838711, 0.516129017, 0.823049903],
    [0.54838711, 0.54838711, 0.826541066],
    [0.54838711, 0.580645144, 0.829244018],
    [0.54838711, 0.612903237, 0.833566606],
    [0.54838711, 0.645161271, 0.837410927],
    [0.54838711, 0.677419364, 0.841218174],
    [0.54838711, 0.709677398, 0.845264196],
    [0.54838711, 0.741935492, 0.849292397],
    [0.54838711, 0.774193525, 0.853133559],
    [0.54838711, 0.806451619, 0.856476009],
    [0.54838711, 0.838709652, 0.86043483],
    [0.54838711, 0.870967746, 0.863592863],
    [0.54838711, 0.90322578, 0.866532564],
    [0.54838711, 0.935483873, 0.870612144],
    [0.54838711, 0.967741907, 0.874267161],
    [0.54838711, 1.0, 0.876696825],
    [0.580645144, 0.0, 0.999718785],
    [0.580645144, 0.0322580636, 0.949186206],
    [0.580645144, 0.0645161271, 0.914251387],
    [0.580645144, 0.0967741907, 0.88790679],
    [0.580645144, 0.129032254, 0.865726829],
    [0.580645144, 0.161290318, 0.847608685],
    [0.580645144, 0.193548381, 0.833960056],
    [0.580645144, 0.225806445, 0.821482837],
    [0.580645144, 0.258064508, 0.812583923],
    [0.580645144, 0.290322572, 0.806245089],
    [0.580645144, 0.322580636, 0.801164508],
    [0.580645144, 0.354838699, 0.797764957],
    [0.580645144, 0.387096763, 0.796007931],
    [0.580645144, 0.419354826, 0.795138359],
    [0.580645144, 0.45161289, 0.795003772],
    [0.580645144, 0.483870953, 0.795988917],
    [0.580645144, 0.516129017, 0.797685623],
    [0.580645144, 0.54838711, 0.800111353],
    [0.580645144, 0.580645144, 0.802395344],
    [0.580645144, 0.612903237, 0.8053146],
    [0.580645144, 0.645161271, 0.807829142],
    [0.580645144, 0.677419364, 0.811690152],
    [0.580645144, 0.709677398, 0.81472522],
    [0.580645144, 0.741935492, 0.818202138],
    [0.580645144, 0.774193525, 0.821881592],
    [0.580645144, 0.806451619, 0.824967682],
    [0.580645144, 0.838709652, 0.828900099],
    [0.580645144, 0.870967746, 0.832020164],
    [0.580645144, 0.90322578, 0.835483074],
    [0.580645144, 0.935483873, 0.838864744],
    [0.580645144, 0.967741907, 0.842080951],
    [0.580645144, 1.0, 0.845296681],
    [0.612903237, 0.0, 0.999547362],
    [0.612903237, 0.0322580636, 0.945764422],
    [0.612903237, 0.0645161271, 0.911415994],
    [0.612903237, 0.0967741907, 0.883123577],
    [0.612903237, 0.129032254, 0.859735012],
    [0.612903237, 0.161290318, 0.840670526],
    [0.612903237, 0.193548381, 0.82521069],
    [0.612903237, 0.225806445, 0.811934054],
    [0.612903237, 0.258064508, 0.80140233],
    [0.612903237, 0.290322572, 0.792641103],
    [0.612903237, 0.322580636, 0.786171854],
    [0.612903237, 0.354838699, 0.780791521],
    [0.612903237, 0.387096763, 0.777385473],
    [0.612903237, 0.419354826, 0.774707317],
    [0.612903237, 0.45161289, 0.773093522],
    [0.612903237, 0.483870953, 0.772445917],
    [0.612903237, 0.516129017, 0.772179067],
    [0.612903237, 0.54838711, 0.772944808],
    [0.612903237, 0.580645144, 0.774548471],
    [0.612903237, 0.612903237, 0.775636971],
    [0.612903237, 0.645161271, 0.777683496],
    [0.612903237, 0.677419364, 0.780007184],
    [0.612903237, 0.709677398, 0.782605529],
    [0.612903237, 0.741935492, 0.785300016],
    [0.612903237, 0.774193525, 0.788385928],
    [0.612903237, 0.806451619, 0.79113698],
    [0.612903237, 0.838709652, 0.794355273],
    [0.612903237, 0.870967746, 0.797234476],
    [0.612903237, 0.90322578, 0.800937891],
    [0.612903237, 0.935483873, 0.803634465],
    [0.612903237, 0.967741907, 0.806393921],
    [0.612903237, 1.0, 0.809812367],
    [0.645161271, 0.0, 0.999615192],
    [0.645161271, 0.0322580636, 0.943839788],
    [0.645161271, 0.0645161271, 0.905890763],
    [0.645161271, 0.0967741907, 0.877109647],
    [0.645161271, 0.129032254, 0.85301429],
    [0.645161271, 0.161290318, 0.832197249],
    [0.645161271, 0.193548381, 0.815183103],
    [0.645161271, 0.225806445, 0.801102579],
    [0.645161271, 0.258064508, 0.788497388],
    [0.645161271, 0.290322572, 0.778765023],
    [0.645161271, 0.322580636, 0.77017194],
    [0.645161271, 0.354838699, 0.763332784],
    [0.645161271, 0.387096763, 0.758161366],
    [0.645161271, 0.419354826, 0.754202724],
    [0.645161271, 0.45161289, 0.750413179],
    [0.645161271, 0.483870953, 0.74851346],
    [0.645161271, 0.516129017, 0.746673524],
    [0.645161271, 0.54838711, 0.745915771],
    [0.645161271, 0.580645144, 0.745624602],
    [0.645161271, 0.612903237, 0.746251345],
    [0.645161271, 0.645161271, 0.746721804],
    [0.645161271, 0.677419364, 0.747771323],
    [0.645161271, 0.709677398, 0.749107063],
    [0.645161271, 0.741935492, 0.751020908],
    [0.645161271, 0.774193525, 0.752973199],
    [0.645161271, 0.806451619, 0.75538063],
    [0.645161271, 0.838709652, 0.75751555],
    [0.645161271, 0.870967746, 0.75973165],
    [0.645161271, 0.90322578, 0.762341678],
    [0.645161271, 0.935483873, 0.765216231],
    [0.645161271, 0.967741907, 0.768125534],
    [0.645161271, 1.0, 0.77074337],
    [0.677419364, 0.0, 0.999708593],
    [0.677419364, 0.0322580636, 0.939839005],
    [0.677419364, 0.0645161271, 0.901025414],
    [0.677419364, 0.0967741907, 0.870255351],
    [0.677419364, 0.129032254, 0.844280839],
    [0.677419364, 0.161290318, 0.822970867],
    [0.677419364, 0.193548381, 0.804524064],
    [0.677419364, 0.225806445, 0.788843811],
    [0.677419364, 0.258064508, 0.775158346],
    [0.677419364, 0.290322572, 0.763398945],
    [0.677419364, 0.322580636, 0.753872871],
    [0.677419364, 0.354838699, 0.745134175],
    [0.677419364, 0.387096763, 0.738277733],
    [0.677419364, 0.419354826, 0.732453406],
    [0.677419364, 0.45161289, 0.727575481],
    [0.677419364, 0.483870953, 0.723841965],
    [0.677419364, 0.516129017, 0.720540166],
    [0.677419364, 0.54838711, 0.718239963],
    [0.677419364, 0.580645144, 0.716486454],
    [0.677419364, 0.612903237, 0.715635598],
    [0.677419364, 0.645161271, 0.714925051],
    [0.677419364, 0.677419364, 0.714545012],
    [0.677419364, 0.709677398, 0.71498996],
    [0.677419364, 0.741935492, 0.71567899],
    [0.677419364, 0.774193525, 0.716234803],
    [0.677419364, 0.806451619, 0.717871308],
    [0.677419364, 0.838709652, 0.718791127],
    [0.677419364, 0.870967746, 0.72053194],
    [0.677419364, 0.90322578, 0.722683549],
    [0.677419364, 0.935483873, 0.724351048],
    [0.677419364, 0.967741907, 0.726576209],
    [0.677419364, 1.0, 0.728643894],
    [0.709677398, 0.0, 0.999596953],
    [0.709677398, 0.0322580636, 0.935573518],
    [0.709677398, 0.0645161271, 0.894888639],
    [0.709677398, 0.0967741907, 0.862461388],
    [0.709677398, 0.129032254, 0.835382462],
    [0.709677398, 0.161290318, 0.812116861],
    [0.709677398, 0.193548381, 0.792493224],
    [0.709677398, 0.225806445, 0.775350571],
    [0.709677398, 0.258064508, 0.76072681],
    [0.709677398, 0.290322572, 0.747632205],
    [0.709677398, 0.322580636, 0.73608458],
    [0.709677398, 0.354838699, 0.726474226],
    [0.709677398, 0.387096763, 0.717632592],
    [0.709677398, 0.419354826, 0.71054256],
    [0.709677398, 0.45161289, 0.70394212],
    [0.709677398, 0.483870953, 0.698540449],
    [0.709677398, 0.516129017, 0.693759143],
    [0.709677398, 0.54838711, 0.690036476],
    [0.709677398, 0.580645144, 0.687220156],
    [0.709677398, 0.612903237, 0.684472024],
    [0.709677398, 0.645161271, 0.682336807],
    [0.709677398, 0.677419364, 0.681030631],
    [0.709677398, 0.709677398, 0.6801036],
    [0.709677398, 0.741935492, 0.67944628],
    [0.709677398, 0.774193525, 0.679206789],
    [0.709677398, 0.806451619, 0.679294646],
    [0.709677398, 0.838709652, 0.679125488],
    [0.709677398, 0.870967746, 0.679969192],
    [0.709677398, 0.90322578, 0.68065834],
    [0.709677398, 0.935483873, 0.681719244],
    [0.709677398, 0.967741907, 0.683055937],
    [0.709677398, 1.0, 0.684114516],
    [0.741935492, 0.0, 0.999273479],
    [0.741935492, 0.0322580636, 0.931557894],
    [0.741935492, 0.0645161271, 0.888096571],
    [0.741935492, 0.0967741907, 0.85403496],
    [0.741935492, 0.129032254, 0.82506448],
    [0.741935492, 0.161290318, 0.80046612],
    [0.741935492, 0.193548381, 0.779378533],
    [0.741935492, 0.225806445, 0.760804355],
    [0.741935492, 0.258064508, 0.744649291],
    [0.741935492, 0.290322572, 0.730389357],
    [0.741935492, 0.322580636, 0.717771113],
    [0.741935492, 0.354838699, 0.706045091],
    [0.741935492, 0.387096763, 0.696632862],
    [0.741935492, 0.419354826, 0.687681139],
    [0.741935492, 0.45161289, 0.679574847],
    [0.741935492, 0.483870953, 0.672787786],
    [0.741935492, 0.516129017, 0.666889966],
    [0.741935492, 0.54838711, 0.661695778],
    [0.741935492, 0.580645144, 0.656733036],
    [0.741935492, 0.612903237, 0.652964413],
    [0.741935492, 0.645161271, 0.650029302],
    [0.741935492, 0.677419364, 0.646735668],
    [0.741935492, 0.709677398, 0.644708514],
    [0.741935492, 0.741935492, 0.642799795],
    [0.741935492, 0.774193525, 0.641121328],
    [0.741935492, 0.806451619, 0.639718175],
    [0.741935492, 0.838709652, 0.63892442],
    [0.741935492, 0.870967746, 0.638244629],
    [0.741935492, 0.90322578, 0.638325989],
    [0.741935492, 0.935483873, 0.637975454],
    [0.741935492, 0.967741907, 0.638190985],
    [0.741935492, 1.0, 0.63849318],
    [0.774193525, 0.0, 0.999230802],
    [0.774193525, 0.0322580636, 0.92750597],
    [0.774193525, 0.0645161271, 0.881080508],
    [0.774193525, 0.0967741907, 0.844158649],
    [0.774193525, 0.129032254, 0.81424439],
    [0.774193525, 0.161290318, 0.787951946],
    [0.774193525, 0.193548381, 0.765151024],
    [0.774193525, 0.225806445, 0.745435953],
    [0.774193525, 0.258064508, 0.727965772],
    [0.774193525, 0.290322572, 0.712026775],
    [0.774193525, 0.322580636, 0.698022068],
    [0.774193525, 0.354838699, 0.685442746],
    [0.774193525, 0.387096763, 0.674217761],
    [0.774193525, 0.419354826, 0.663944662],
    [0.774193525, 0.45161289, 0.655153692],
    [0.774193525, 0.483870953, 0.646618128],
    [0.774193525, 0.516129017, 0.638977885],
    [0.774193525, 0.54838711, 0.632755101],
    [0.774193525, 0.580645144, 0.627145529],
    [0.774193525, 0.612903237, 0.62133497],
    [0.774193525, 0.645161271, 0.617064416],
    [0.774193525, 0.677419364, 0.612876296],
    [0.774193525, 0.709677398, 0.608954072],
    [0.774193525, 0.741935492, 0.605589211],
    [0.774193525, 0.774193525, 0.602926016],
    [0.774193525, 0.806451619, 0.600471497],
    [0.774193525, 0.838709652, 0.598449886],
    [0.774193525, 0.870967746, 0.596286833],
    [0.774193525, 0.90322578, 0.595241308],
    [0.774193525, 0.935483873, 0.593505681],
    [0.774193525, 0.967741907, 0.592833698],
    [0.774193525, 1.0, 0.592131555],
    [0.806451619, 0.0, 0.999302387],
    [0.806451619, 0.0322580636, 0.92289722],
    [0.806451619, 0.0645161271, 0.873291314],
    [0.806451619, 0.0967741907, 0.834206223],
    [0.806451619, 0.129032254, 0.801893771],
    [0.806451619, 0.161290318, 0.774534583],
    [0.806451619, 0.193548381, 0.750029027],
    [0.806451619, 0.225806445, 0.72894299],
    [0.806451619, 0.258064508, 0.710058749],
    [0.806451619, 0.290322572, 0.69295615],
    [0.806451619, 0.322580636, 0.677488863],
    [0.806451619, 0.354838699, 0.66374439],
    [0.806451619, 0.387096763, 0.65141511],
    [0.806451619, 0.419354826, 0.639893532],
    [0.806451619, 0.45161289, 0.629357934],
    [0.806451619, 0.483870953, 0.620133996],
    [0.806451619, 0.516129017, 0.611767471],
    [0.806451619, 0.54838711, 0.603736758],
    [0.806451619, 0.580645144, 0.596742392],
    [0.806451619, 0.612903237, 0.589931488],
    [0.806451619, 0.645161271, 0.584026754],
    [0.806451619, 0.677419364, 0.578647017],
    [0.806451619, 0.709677398, 0.573657215],
    [0.806451619, 0.741935492, 0.569077253],
    [0.806451619, 0.774193525, 0.564906776],
    [0.806451619, 0.806451619, 0.561346591],
    [0.806451619, 0.838709652, 0.558323264],
    [0.806451619, 0.870967746, 0.555001736],
    [0.806451619, 0.90322578, 0.552357137],
    [0.806451619, 0.935483873, 0.550052047],
    [0.806451619, 0.967741907, 0.548054576],
    [0.806451619, 1.0, 0.546204209],
    [0.838709652, 0.0, 0.99921602],
    [0.838709652, 0.0322580636, 0.917014241],
    [0.838709652, 0.0645161271, 0.865273595],
    [0.838709652, 0.0967741907, 0.823359311],
    [0.838709652, 0.129032254, 0.789689958],
    [0.838709652, 0.161290318, 0.759814203],
    [0.838709652, 0.193548381, 0.734258711],
    [0.838709652, 0.225806445, 0.711814284],
    [0.838709652, 0.258064508, 0.691318572],
    [0.838709652, 0.290322572, 0.673084676],
    [0.838709652, 0.322580636, 0.65623939],
    [0.838709652, 0.354838699, 0.641543031],
    [0.838709652, 0.387096763, 0.627601266],
    [0.838709652, 0.419354826, 0.615205705],
    [0.838709652, 0.45161289, 0.603550494],
    [0.838709652, 0.483870953, 0.593038261],
    [0.838709652, 0.516129017, 0.583541095],
    [0.838709652, 0.54838711, 0.574659884],
    [0.838709652, 0.580645144, 0.566166818],
    [0.838709652, 0.612903237, 0.558216572],
    [0.838709652, 0.645161271, 0.551157296],
    [0.838709652, 0.677419364, 0.544620514],
    [0.838709652, 0.709677398, 0.538561404],
    [0.838709652, 0.741935492, 0.532766104],
    [0.838709652, 0.774193525, 0.52796483],
    [0.838709652, 0.806451619, 0.523093522],
    [0.838709652, 0.838709652, 0.518546164],
    [0.838709652, 0.870967746, 0.514443815],
    [0.838709652, 0.90322578, 0.510521412],
    [0.838709652, 0.935483873, 0.506983817],
    [0.838709652, 0.967741907, 0.503905773],
    [0.838709652, 1.0, 0.500768542],
    [0.870967746, 0.0, 0.998886764],
    [0.870967746, 0.0322580636, 0.912056684],
    [0.870967746, 0.0645161271, 0.856090665],
    [0.870967746, 0.0967741907, 0.813316703],
    [0.870967746, 0.129032254, 0.776512742],
    [0.870967746, 0.161290318, 0.745504141],
    [0.870967746, 0.193548381, 0.717649519],
    [0.870967746, 0.225806445, 0.694090664],
    [0.870967746, 0.258064508, 0.672337949],
    [0.870967746, 0.290322572, 0.652758121],
    [0.870967746, 0.322580636, 0.634561718],
    [0.870967746, 0.354838699, 0.618581116],
    [0.870967746, 0.387096763, 0.603639543],
    [0.870967746, 0.419354826, 0.590452492],
    [0.870967746, 0.45161289, 0.577456355],
    [0.870967746, 0.483870953, 0.56573987],
    [0.870967746, 0.516129017, 0.555366099],
    [0.870967746, 0.54838711, 0.545105159],
    [0.870967746, 0.580645144, 0.535749853],
    [0.870967746, 0.612903237, 0.526910901],
    [0.870967746, 0.645161271, 0.518724084],
    [0.870967746, 0.677419364, 0.511252344],
    [0.870967746, 0.709677398, 0.504221678],
    [0.870967746, 0.741935492, 0.497660786],
    [0.870967746, 0.774193525, 0.491458267],
    [0.870967746, 0.806451619, 0.485391796],
    [0.870967746, 0.838709652, 0.479988754],
    [0.870967746, 0.870967746, 0.475036979],
    [0.870967746, 0.90322578, 0.47002697],
    [0.870967746, 0.935483873, 0.465666234],
    [0.870967746, 0.967741907, 0.461197346],
    [0.870967746, 1.0, 0.457513541],
    [0.90322578, 0.0, 0.999261618],
    [0.90322578, 0.0322580636, 0.906148195],
    [0.90322578, 0.0645161271, 0.847865582],
    [0.90322578, 0.0967741907, 0.801621437],
    [0.90322578, 0.129032254, 0.762910903],
    [0.90322578, 0.161290318, 0.72943759],
    [0.90322578, 0.193548381, 0.701171458],
    [0.90322578, 0.225806445, 0.675181389],
    [0.90322578, 0.258064508, 0.652297735],
    [0.90322578, 0.290322572, 0.631448805],
    [0.90322578, 0.322580636, 0.6125893],
    [0.90322578, 0.354838699, 0.595068574],
    [0.90322578, 0.387096763, 0.579407871],
    [0.90322578, 0.419354826, 0.564718783],
    [0.90322578, 0.45161289, 0.551095963],
    [0.90322578, 0.483870953, 0.538346171],
    [0.90322578, 0.516129017, 0.527041495],
    [0.90322578, 0.54838711, 0.515954137],
    [0.90322578, 0.580645144, 0.505805612],
    [0.90322578, 0.612903237, 0.495727658],
    [0.90322578, 0.645161271, 0.48713094],
    [0.90322578, 0.677419364, 0.478613317],
    [0.90322578, 0.709677398, 0.470604986],
    [0.90322578, 0.741935492, 0.463271946],
    [0.90322578, 0.774193525, 0.456057519],
    [0.90322578, 0.806451619, 0.449282944],
    [0.90322578, 0.838709652, 0.443118125],
    [0.90322578, 0.870967746, 0.436852336],
    [0.90322578, 0.90322578, 0.431230724],
    [0.90322578, 0.935483873, 0.425722212],
    [0.90322578, 0.967741907, 0.420679718],
    [0.90322578, 1.0, 0.415804207],
    [0.935483873, 0.0, 0.999348462],
    [0.935483873, 0.0322580636, 0.90058887],
    [0.935483873, 0.0645161271, 0.838353872],
    [0.935483873, 0.0967741907, 0.789350748],
    [0.935483873, 0.129032254, 0.748785496],
    [0.935483873, 0.161290318, 0.714584708],
    [0.935483873, 0.193548381, 0.68369019],
    [0.935483873, 0.225806445, 0.65625],
    [0.935483873, 0.258064508, 0.632252455],
    [0.935483873, 0.290322572, 0.61035949],
    [0.935483873, 0.322580636, 0.590337038],
    [0.935483873, 0.354838699, 0.571849883],
    [0.935483873, 0.387096763, 0.55500716],
    [0.935483873, 0.419354826, 0.53896445],
    [0.935483873, 0.45161289, 0.524693549],
    [0.935483873, 0.483870953, 0.510960042],
    [0.935483873, 0.516129017, 0.498854727],
    [0.935483873, 0.54838711, 0.486841291],
    [0.935483873, 0.580645144, 0.476010293],
    [0.935483873, 0.612903237, 0.465517223],
    [0.935483873, 0.645161271, 0.455910414],
    [0.935483873, 0.677419364, 0.446429074],
    [0.935483873, 0.709677398, 0.437813222],
    [0.935483873, 0.741935492, 0.429753393],
    [0.935483873, 0.774193525, 0.421907485],
    [0.935483873, 0.806451619, 0.414320529],
    [0.935483873, 0.838709652, 0.407611936],
    [0.935483873, 0.870967746, 0.400826842],
    [0.935483873, 0.90322578, 0.394233793],
    [0.935483873, 0.935483873, 0.388181746],
    [0.935483873, 0.967741907, 0.382491857],
    [0.935483873, 1.0, 0.376779497],
    [0.967741907, 0.0, 0.999367774],
    [0.967741907, 0.0322580636, 0.89469403],
    [0.967741907, 0.0645161271, 0.828951776],
    [0.967741907, 0.0967741907, 0.777682722],
    [0.967741907, 0.129032254, 0.734431386],
    [0.967741907, 0.161290318, 0.698033273],
    [0.967741907, 0.193548381, 0.665824473],
    [0.967741907, 0.225806445, 0.637124658],
    [0.967741907, 0.258064508, 0.611893237],
    [0.967741907, 0.290322572, 0.588772058],
    [0.967741907, 0.322580636, 0.567738712],
    [0.967741907, 0.354838699, 0.548281848],
    [0.967741907, 0.387096763, 0.530600727],
    [0.967741907, 0.419354826, 0.513691962],
    [0.967741907, 0.45161289, 0.498835474],
    [0.967741907, 0.483870953, 0.484352112],
    [0.967741907, 0.516129017, 0.471220315],
    [0.967741907, 0.54838711, 0.458756179],
    [0.967741907, 0.580645144, 0.446584702],
    [0.967741907, 0.612903237, 0.435756803],
    [0.967741907, 0.645161271, 0.425203115],
    [0.967741907, 0.677419364, 0.415564835],
    [0.967741907, 0.709677398, 0.406288981],
    [0.967741907, 0.741935492, 0.39722842],
    [0.967741907, 0.774193525, 0.389080793],
    [0.967741907, 0.806451619, 0.380997419],
    [0.967741907, 0.838709652, 0.373503],
    [0.967741907, 0.870967746, 0.366132587],
    [0.967741907, 0.90322578, 0.359631181],
    [0.967741907, 0.935483873, 0.352768183],
    [0.967741907, 0.967741907, 0.34637785],
    [0.967741907, 1.0, 0.340391487],
    [1.0, 0.0, 0.999017],
    [1.0, 0.0322580636, 0.888695955],
    [1.0, 0.0645161271, 0.819546819],
    [1.0, 0.0967741907, 0.764902115],
    [1.0, 0.129032254, 0.720057428],
    [1.0, 0.161290318, 0.681741416],
    [1.0, 0.193548381, 0.64763844],
    [1.0, 0.225806445, 0.618083179],
    [1.0, 0.258064508, 0.591395974],
    [1.0, 0.290322572, 0.566850543],
    [1.0, 0.322580636, 0.544970512],
    [1.0, 0.354838699, 0.524724364],
    [1.0, 0.387096763, 0.505911529],
    [1.0, 0.419354826, 0.48860684],
    [1.0, 0.45161289, 0.472925812],
    [1.0, 0.483870953, 0.457494408],
    [1.0, 0.516129017, 0.444006711],
    [1.0, 0.54838711, 0.430879474],
    [1.0, 0.580645144, 0.418608844],
    [1.0, 0.612903237, 0.406750262],
    [1.0, 0.645161271, 0.396029472],
    [1.0, 0.677419364, 0.385790974],
    [1.0, 0.709677398, 0.375992537],
    [1.0, 0.741935492, 0.366585225],
    [1.0, 0.774193525, 0.357837021],
    [1.0, 0.806451619, 0.349729568],
    [1.0, 0.838709652, 0.341774017],
    [1.0, 0.870967746, 0.33387062],
    [1.0, 0.90322578, 0.326749653],
    [1.0, 0.935483873, 0.319770008],
    [1.0, 0.967741907, 0.313370258],
    [1.0, 1.0, 0.307006001],
];

/// `[roughness, average albedo]`, sorted by roughness.
#[rustfmt::skip]
pub(super) static AVERAGE: [[f32; 2]; 32] = [
    [0.0, 1.0],
    [0.0322580636, 0.999997437],
    [0.0645161271, 0.999908864],
    [0.0967741907, 0.999575734],
    [0.129032254, 0.998789787],
    [0.161290318, 0.997297466],
    [0.193548381, 0.994618714],
    [0.225806445, 0.990865767],
    [0.258064508, 0.985747218],
    [0.290322572, 0.978885651],
    [0.322580636, 0.970225394],
    [0.354838699, 0.959405661],
    [0.387096763, 0.946471095],
    [0.419354826, 0.930917382],
    [0.45161289, 0.913297951],
    [0.483870953, 0.893236518],
    [0.516129017, 0.870940566],
    [0.54838711, 0.846374035],
    [0.580645144, 0.819777906],
    [0.612903237, 0.791344583],
    [0.645161271, 0.761332154],
    [0.677419364, 0.729998946],
    [0.709677398, 0.697633505],
    [0.741935492, 0.664500475],
    [0.774193525, 0.630942404],
    [0.806451619, 0.597415805],
    [0.838709652, 0.564011693],
    [0.870967746, 0.531199038],
    [0.90322578, 0.499074489],
    [0.935483873, 0.467900366],
    [0.967741907, 0.437781125],
    [1.0, 0.408982933],
];
